//! CLI module for geoschool
//!
//! Provides the command-line interface:
//! - serve: load config, connect the database, run the HTTP service

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
