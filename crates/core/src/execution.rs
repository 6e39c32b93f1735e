use std::env;
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info, warn};

use crate::action_definitions::{Action, Invocation};
use crate::config::DEFAULT_SHELL;
use crate::error::{Error, Result};

/// Combined stdout and stderr of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub text: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// What the output screen shows after an action has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub title: String,
    /// The captured output on success, `Error: ...` on failure.
    pub text: String,
    pub failed: bool,
    /// Raw combined output, kept on failure as well.
    pub output: String,
}

impl ExecutionResult {
    #[must_use]
    pub fn success(title: String, output: String) -> Self {
        Self {
            title,
            text: output.clone(),
            failed: false,
            output,
        }
    }

    #[must_use]
    pub fn failure(title: String, error: &Error, output: String) -> Self {
        Self {
            title,
            text: format!("Error: {error}"),
            failed: true,
            output,
        }
    }
}

/// Runs actions to completion.
pub trait Executor {
    /// Runs `invocation` synchronously and captures its combined output.
    ///
    /// # Errors
    ///
    /// Returns an error if a script cannot be found or the process cannot be
    /// spawned or read from. A non-zero exit is not an error here.
    fn execute(&self, invocation: &Invocation) -> Result<CapturedOutput>;

    /// Runs `action`, folding every failure into the returned result.
    fn run(&self, action: &Action) -> ExecutionResult {
        let title = action.invocation.output_title();

        match self.execute(&action.invocation) {
            Ok(captured) if captured.succeeded() => ExecutionResult::success(title, captured.text),
            Ok(captured) => {
                let error = match captured.exit_code {
                    Some(code) => Error::SubProcessExit(code),
                    None => Error::SubProcessTerminated,
                };
                warn!("`{}` failed: {}", action.name, error);
                ExecutionResult::failure(title, &error, captured.text)
            }
            Err(error) => {
                warn!("`{}` could not be run: {}", action.name, error);
                ExecutionResult::failure(title, &error, String::new())
            }
        }
    }
}

/// Executes invocations through a shell, `<shell> -c <command>` for inline
/// commands and `<shell> <script>` for scripts.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    base_directory: PathBuf,
    dry_run: bool,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellExecutor {
    /// Creates an executor whose script base directory is the current working directory.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            base_directory: env::current_dir().unwrap_or_default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_base_directory(mut self, base_directory: impl Into<PathBuf>) -> Self {
        self.base_directory = base_directory.into();
        self
    }

    /// When set, invocations are described instead of spawned.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolves a script path.
    ///
    /// The path is used as given if it exists relative to the process working
    /// directory. Otherwise `<base directory>/<path>` is tried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScriptNotFound`] naming the last path tried when
    /// neither exists.
    pub fn resolve_script_path(&self, script_path: &str) -> Result<PathBuf> {
        if !is_missing(Path::new(script_path)) {
            return Ok(PathBuf::from(script_path));
        }

        let joined = format!("{}/{}", self.base_directory.display(), script_path);
        if is_missing(Path::new(&joined)) {
            return Err(Error::ScriptNotFound(joined));
        }

        Ok(PathBuf::from(joined))
    }

    fn build_command(&self, invocation: &Invocation) -> Result<Command> {
        let mut command = Command::new(&self.shell);
        match invocation {
            Invocation::ShellCommand(line) => {
                command.args(["-c", line.as_str()]);
            }
            Invocation::ScriptPath(script_path) => {
                let resolved = self.resolve_script_path(script_path)?;
                debug!("Resolved script `{}` to `{}`", script_path, resolved.display());
                command.arg(resolved);
            }
        }
        Ok(command)
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        let command = self.build_command(invocation)?;

        if self.dry_run {
            info!("Dry run, not executing {}", invocation);
            return Ok(CapturedOutput {
                text: format!("Dry run, would execute:\n{}", describe(&command)),
                exit_code: Some(0),
            });
        }

        info!("Executing {} with `{}`", invocation, self.shell);
        capture_combined_output(command)
    }
}

fn is_missing(path: &Path) -> bool {
    matches!(fs::metadata(path), Err(e) if e.kind() == ErrorKind::NotFound)
}

fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|argument| argument.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

/// Spawns `command` with stdout and stderr on the same pipe and waits for it.
///
/// Blocks until the child and everything holding the pipe open have exited.
pub fn capture_combined_output(mut command: Command) -> Result<CapturedOutput> {
    let (mut reader, writer) = io::pipe()?;
    command
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    let mut child = command.spawn().map_err(Error::SubProcess)?;
    // The command still owns our copies of the write end; reading would never
    // reach EOF while they are open.
    drop(command);

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let status = child.wait().map_err(Error::SubProcess)?;
    debug!("Sub process finished with {}", status);

    Ok(CapturedOutput {
        text: String::from_utf8_lossy(&buffer).into_owned(),
        exit_code: status.code(),
    })
}
