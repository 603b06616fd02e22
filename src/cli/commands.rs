//! CLI command implementations
//!
//! `serve` resolves the server configuration and runs the HTTP server on a
//! multi-threaded tokio runtime. `client` drives a [`Dashboard`] through one
//! user flow and prints the result.

use std::fs;
use std::path::Path;

use crate::client::{ApiClient, Dashboard};
use crate::client::render::render_table;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LogFormat};
use crate::records::Validation;

use super::args::{ClientAction, Command, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::{confirm, report_progress, write_output};

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    init_logging(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Client { api_url, action } => client(&api_url, action),
    }
}

/// Load a JSON configuration file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Merge the config file (if any) with command line and environment values
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.strict {
        config.validation = Validation::Strict;
    }
    if args.no_seed {
        config.seed = false;
    }

    Ok(config)
}

/// Run the API server until the process is stopped
fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    tracing::info!(
        addr = %config.socket_addr(),
        seed = config.seed,
        validation = ?config.validation,
        "starting student management backend"
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one client action against the API
fn client(api_url: &str, action: ClientAction) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;

    let output = rt.block_on(async {
        let mut dashboard =
            Dashboard::new(ApiClient::new(api_url)).with_progress(report_progress);
        run_client_action(&mut dashboard, action, confirm).await
    })?;

    write_output(&output)
}

/// The error notification left by the last flow, as a CLI error
fn last_failure(dashboard: &Dashboard, fallback: &str) -> CliError {
    let message = dashboard
        .notification()
        .filter(|n| n.is_error())
        .map(|n| n.message.clone())
        .unwrap_or_else(|| fallback.to_string());
    CliError::request_failed(message)
}

/// The form title followed by the refreshed table
fn titled(dashboard: &Dashboard) -> String {
    format!("{}\n\n{}", dashboard.mode().title(), dashboard.render(None))
}

/// Drive `dashboard` through one action and return what to print.
///
/// `ask` is called with the confirmation prompt before a delete that was
/// not pre-confirmed.
pub async fn run_client_action<F>(
    dashboard: &mut Dashboard,
    action: ClientAction,
    ask: F,
) -> CliResult<String>
where
    F: FnOnce(&str) -> CliResult<bool>,
{
    match action {
        ClientAction::Health => {
            let health = dashboard
                .api()
                .health()
                .await
                .map_err(|e| CliError::request_failed(format!("Error: {}", e)))?;
            Ok(format!(
                "{}: {} ({})",
                health.status, health.message, health.timestamp
            ))
        }

        ClientAction::List { search } => {
            dashboard.start().await;
            if dashboard.notification().is_some_and(|n| n.is_error()) {
                return Err(last_failure(dashboard, "Error loading students"));
            }
            Ok(dashboard.render(search.as_deref()))
        }

        ClientAction::Show { id } => {
            let student = dashboard
                .api()
                .get(id)
                .await
                .map_err(|e| CliError::request_failed(format!("Error: {}", e)))?;
            Ok(render_table(&[student]))
        }

        ClientAction::Add {
            name,
            age,
            grade,
            email,
        } => {
            dashboard.start().await;
            dashboard.open_add();
            if let Some(form) = dashboard.form_mut() {
                form.name = name;
                form.age = age;
                form.grade = grade;
                form.email = email;
            }
            if !dashboard.save().await {
                return Err(last_failure(dashboard, "Error: Student not saved"));
            }
            Ok(titled(dashboard))
        }

        ClientAction::Edit {
            id,
            name,
            age,
            grade,
            email,
        } => {
            dashboard.start().await;
            if !dashboard.open_edit(id) {
                return Err(last_failure(
                    dashboard,
                    &format!("Error: Student {} not found", id),
                ));
            }
            if let Some(form) = dashboard.form_mut() {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(age) = age {
                    form.age = age;
                }
                if let Some(grade) = grade {
                    form.grade = grade;
                }
                if let Some(email) = email {
                    form.email = email;
                }
            }
            if !dashboard.save().await {
                return Err(last_failure(dashboard, "Error: Student not saved"));
            }
            Ok(titled(dashboard))
        }

        ClientAction::Delete { id, yes } => {
            dashboard.start().await;
            let prompt = dashboard.open_confirm_delete(id);
            if !yes && !ask(&prompt)? {
                dashboard.cancel_delete();
                return Ok("Deletion cancelled".to_string());
            }
            if !dashboard.confirm_delete().await {
                return Err(last_failure(dashboard, "Error: Student not deleted"));
            }
            Ok(dashboard.render(None))
        }
    }
}
