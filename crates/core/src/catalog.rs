use log::info;

use crate::action_definitions::Action;
use crate::error::{Error, Result};
use crate::file_handling;

/// The ordered, immutable list of actions offered by the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// Loads the catalog from the config document at `config_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, is malformed, or holds
    /// an invalid entry.
    pub fn load(config_path: &str) -> Result<Self> {
        let actions = file_handling::get_actions(config_path)?;
        info!("Loaded {} actions from `{}`", actions.len(), config_path);
        Ok(Self { actions })
    }

    #[must_use]
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not below [`count`](Self::count).
    pub fn get(&self, index: usize) -> Result<&Action> {
        self.actions.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.actions.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}
