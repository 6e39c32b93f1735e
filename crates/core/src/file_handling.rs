//! Reading the actions config document.
//!
//! This module opens the config file, parses it as JSON or YAML depending on
//! its extension and turns each entry into a validated [`Action`].

use std::fs::File;

use log::debug;

use crate::action_definitions::{Action, ConfigDocument};
use crate::config::ConfigFormat;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn parse_config_document(config_path: &str, reader: File) -> Result<ConfigDocument> {
    match ConfigFormat::from_path(config_path) {
        ConfigFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            Error::json_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        }),
        ConfigFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        }),
    }
}

/// Loads and validates the actions from a configuration file.
///
/// Actions are returned in document order. An empty `commands` list is not an
/// error and yields no actions.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The document is malformed or doesn't match the expected structure
/// - An entry defines neither or both of `command` and `script`
///
/// # Examples
///
/// ```no_run
/// use quickrun_core::file_handling::get_actions;
///
/// let actions = get_actions("config.json")?;
/// println!("Loaded {} actions", actions.len());
/// # Ok::<(), quickrun_core::error::Error>(())
/// ```
pub fn get_actions(config_path: &str) -> Result<Vec<Action>> {
    let reader = get_reader("config", config_path)?;
    let document = parse_config_document(config_path, reader)?;

    debug!(
        "Parsed {} action definitions from `{}`",
        document.commands.len(),
        config_path
    );

    document
        .commands
        .into_iter()
        .map(Action::try_from)
        .collect()
}
