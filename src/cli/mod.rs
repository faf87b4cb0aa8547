//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod settings;

pub use args::{Args, Command};
pub use commands::handle_config_action;
pub use settings::build_job;
