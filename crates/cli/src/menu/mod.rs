//! Interactive action menu.
//!
//! This module provides the terminal interface of quickrun: a menu screen
//! listing the configured actions and an output screen showing the result of
//! the last one that ran.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter or space to run the highlighted action
//! - 'q' or Ctrl+C to quit from the menu, or to go back from the output screen

pub mod controller;
pub mod input;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod view;

// Re-exports for convenience
pub use controller::InteractionController;
pub use theme::Theme;
pub use types::{Flow, MenuEvent, Screen};
pub use ui::run_menu;
