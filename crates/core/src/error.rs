use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("exit status {}", .0)]
    SubProcessExit(i32),

    #[error("sub process was terminated by a signal")]
    SubProcessTerminated,

    #[error("failed to run sub process: {}", .0)]
    SubProcess(std::io::Error),

    #[error("script not found: {}", .0)]
    ScriptNotFound(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Action `{}` defines neither a `command` nor a `script`", .0)]
    MissingInvocation(String),

    #[error("Action `{}` defines both a `command` and a `script`, only one is allowed", .0)]
    AmbiguousInvocation(String),

    #[error("Action index {} is out of range for a catalog of {} actions", .index, .count)]
    IndexOutOfRange { index: usize, count: usize },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
