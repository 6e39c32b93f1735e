use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Prefix of the output screen title for inline commands.
pub const COMMAND_OUTPUT_PREFIX: &str = "Command Output: ";
/// Prefix of the output screen title for scripts.
pub const SCRIPT_OUTPUT_PREFIX: &str = "Script Output: ";

/// The top level of a config document.
#[derive(Deserialize, Debug)]
pub struct ConfigDocument {
    #[serde(default)]
    pub commands: Vec<ActionDefinition>,
}

/// One entry of the `commands` list, as written in the config document.
#[derive(Deserialize, Debug, Clone)]
pub struct ActionDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub command: Option<String>,
    pub script: Option<String>,
}

/// How an action is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A line handed to the shell with `-c`.
    ShellCommand(String),
    /// A path to a script file, handed to the shell as its first argument.
    ScriptPath(String),
}

impl Invocation {
    /// The command line or script path this invocation targets.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Invocation::ShellCommand(command) => command,
            Invocation::ScriptPath(path) => path,
        }
    }

    #[must_use]
    pub fn output_title(&self) -> String {
        match self {
            Invocation::ShellCommand(command) => format!("{COMMAND_OUTPUT_PREFIX}{command}"),
            Invocation::ScriptPath(path) => format!("{SCRIPT_OUTPUT_PREFIX}{path}"),
        }
    }
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Invocation::ShellCommand(command) => write!(formatter, "command `{command}`"),
            Invocation::ScriptPath(path) => write!(formatter, "script `{path}`"),
        }
    }
}

/// A named, selectable menu entry bound to exactly one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub description: String,
    pub invocation: Invocation,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<ActionDefinition> for Action {
    type Error = Error;

    fn try_from(definition: ActionDefinition) -> Result<Self> {
        let invocation = match (
            non_empty(definition.command),
            non_empty(definition.script),
        ) {
            (Some(command), None) => Invocation::ShellCommand(command),
            (None, Some(script)) => Invocation::ScriptPath(script),
            (Some(_), Some(_)) => return Err(Error::AmbiguousInvocation(definition.name)),
            (None, None) => return Err(Error::MissingInvocation(definition.name)),
        };

        Ok(Self {
            name: definition.name,
            description: definition.description,
            invocation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(command: Option<&str>, script: Option<&str>) -> ActionDefinition {
        ActionDefinition {
            name: "build".to_string(),
            description: "Build it".to_string(),
            command: command.map(str::to_string),
            script: script.map(str::to_string),
        }
    }

    #[test]
    fn test_command_definition_becomes_shell_command() {
        let action = Action::try_from(definition(Some("make all"), None)).unwrap();
        assert_eq!(action.name, "build");
        assert_eq!(action.description, "Build it");
        assert_eq!(
            action.invocation,
            Invocation::ShellCommand("make all".to_string())
        );
    }

    #[test]
    fn test_script_definition_becomes_script_path() {
        let action = Action::try_from(definition(None, Some("build.sh"))).unwrap();
        assert_eq!(
            action.invocation,
            Invocation::ScriptPath("build.sh".to_string())
        );
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let action = Action::try_from(definition(Some(""), Some("build.sh"))).unwrap();
        assert_eq!(
            action.invocation,
            Invocation::ScriptPath("build.sh".to_string())
        );
    }

    // Entries without any invocation are rejected rather than silently
    // producing empty output.
    #[test]
    fn test_neither_is_rejected() {
        let result = Action::try_from(definition(None, Some("")));
        assert!(matches!(result, Err(Error::MissingInvocation(name)) if name == "build"));
    }

    #[test]
    fn test_both_is_rejected() {
        let result = Action::try_from(definition(Some("make"), Some("build.sh")));
        assert!(matches!(result, Err(Error::AmbiguousInvocation(_))));
    }

    #[test]
    fn test_output_titles() {
        let command = Invocation::ShellCommand("ls -la".to_string());
        assert_eq!(command.output_title(), "Command Output: ls -la");
        assert_eq!(command.target(), "ls -la");

        let script = Invocation::ScriptPath("scripts/run.sh".to_string());
        assert_eq!(script.output_title(), "Script Output: scripts/run.sh");
        assert_eq!(script.target(), "scripts/run.sh");
    }

    #[test]
    fn test_invocation_display() {
        let command = Invocation::ShellCommand("ls".to_string());
        assert_eq!(format!("{command}"), "command `ls`");
        let script = Invocation::ScriptPath("run.sh".to_string());
        assert_eq!(format!("{script}"), "script `run.sh`");
    }
}
