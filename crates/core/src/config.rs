//! Configuration path utilities for quickrun.
//!
//! This module resolves the config document path and decides which parser
//! reads it.

use std::path::Path;

/// Default path for the actions configuration file, relative to the working directory
const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default shell to use for command and script execution
pub const DEFAULT_SHELL: &str = "bash";

/// Format of a config document, decided by its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match Path::new(path)
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use quickrun_core::config::get_config_path;
///
/// assert_eq!(get_config_path(&None), "config.json");
/// assert_eq!(get_config_path(&Some("/etc/menu.json".to_string())), "/etc/menu.json");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.json".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.json");
    }

    #[test]
    fn test_get_config_path_with_none() {
        assert_eq!(get_config_path(&None), "config.json");
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/menu.json".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("menu.json"));
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(ConfigFormat::from_path("config.json"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path("menu.yml"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("/a/b/menu.YAML"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("no_extension"), ConfigFormat::Json);
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "bash");
    }
}
