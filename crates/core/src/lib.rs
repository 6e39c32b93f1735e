//! Quickrun Core Library
//!
//! This crate provides the core functionality for quickrun, a terminal menu
//! that runs named actions from a config file and shows their output.
//!
//! # Key Features
//!
//! - **Action Catalog**: Load and validate JSON or YAML action definitions
//! - **Execution**: Run inline shell commands or scripts and capture their combined output
//! - **Error Handling**: Error types for config and execution failures
//!
//! # Examples
//!
//! Loading the catalog and running the first action:
//!
//! ```no_run
//! use quickrun_core::catalog::ActionCatalog;
//! use quickrun_core::execution::{Executor, ShellExecutor};
//!
//! let catalog = ActionCatalog::load("config.json")?;
//! let result = ShellExecutor::default().run(catalog.get(0)?);
//! println!("{}\n{}", result.title, result.text);
//! # Ok::<(), quickrun_core::error::Error>(())
//! ```

pub mod action_definitions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
