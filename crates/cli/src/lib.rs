//! Quickrun CLI Library
//!
//! This crate provides the terminal front end for quickrun: argument parsing,
//! the menu/output state machine and the crossterm event loop that drives it.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: Keyboard mapping, screen state, rendering and the terminal loop
//!
//! # Examples
//!
//! ```bash
//! # Show the menu for ./config.json
//! qr
//!
//! # Use another config document and shell
//! qr --config-path ~/menus/ops.yml --shell zsh
//!
//! # Show what each action would run without running it
//! qr --dry-run
//! ```

pub mod cli_args;
pub mod menu;
