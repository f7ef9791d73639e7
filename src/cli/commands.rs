//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::Config;
use crate::http_server::HttpServer;
use crate::store::{MySqlSchoolStore, SchoolStore};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Start the HTTP service
///
/// 1. Load configuration (file + env overrides, optional --port override)
/// 2. Connect the MySQL pool
/// 3. Build the HTTP server and run it on a tokio runtime
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config =
        Config::load(config_path).map_err(|e| CliError::config_error(e.to_string()))?;
    if let Some(port) = port_override {
        config.http.port = port;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = MySqlSchoolStore::connect(&config.database.url)
            .await
            .map_err(|e| CliError::boot_failed(format!("database connection failed: {}", e)))?;
        let store: Arc<dyn SchoolStore> = Arc::new(store);

        let server = HttpServer::new(config.http.clone(), store);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
