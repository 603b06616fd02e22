//! studentdesk CLI entry point
//!
//! Parses arguments and dispatches to a command via `cli::run`, printing
//! any error to stderr and exiting non-zero.

use studentdesk::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
