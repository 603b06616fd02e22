//! CLI module for studentdesk
//!
//! Provides command-line interface for:
//! - serve: run the API server
//! - client: list, show, add, edit and delete students over HTTP

mod args;
mod commands;
mod errors;
mod io;

pub use args::{ClientAction, Cli, Command, ServeArgs};
pub use commands::{load_config, resolve_config, run, run_client_action, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{confirm, report_progress, write_output};
