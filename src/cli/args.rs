//! CLI argument definitions using clap
//!
//! Commands:
//! - studentdesk serve [--config <path>] [--host <host>] [--port <port>]
//! - studentdesk client [--api-url <url>] <health|list|show|add|edit|delete>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_API_URL;

/// studentdesk - student records API server and terminal client
#[derive(Parser, Debug)]
#[command(name = "studentdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the API server
    Serve(ServeArgs),

    /// Send requests to a running server
    Client {
        /// Base URL of the API
        #[arg(long, env = "STUDENTDESK_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        #[command(subcommand)]
        action: ClientAction,
    },
}

/// Server options. Flags override the environment, which overrides the
/// config file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "STUDENTDESK_HOST")]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Also enforce the age range and email shape on the server
    #[arg(long)]
    pub strict: bool,

    /// Start with an empty store instead of the example records
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ClientAction {
    /// Check that the server is up
    Health,

    /// Show the summary and the student table
    List {
        /// Only show rows whose name, email or grade contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one student
    Show { id: u64 },

    /// Add a student
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, default_value = "")]
        grade: String,
        #[arg(long, default_value = "")]
        email: String,
    },

    /// Edit a student; omitted fields keep their current value
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a student after confirmation
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
