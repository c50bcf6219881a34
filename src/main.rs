//! Garden Search - Binary Entry Point
//!
//! Serves the catalog over MCP (stdio), HTTP, or both, as selected by
//! `GARDEN_TRANSPORT`.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use garden_search::api::{self, AppState};
use garden_search::catalog::Catalog;
use garden_search::config::Config;
use garden_search::logging::{init_logging, LogFormat};
use garden_search::server::McpServer;
use garden_search::tools::register_all_tools;
use garden_search::types::McpResult;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(LogFormat::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_format) {
        eprintln!("failed to initialize logging: {}", e);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "garden-search stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> McpResult<()> {
    let catalog = Arc::new(Catalog::with_file_path(&config.catalog_path)?);
    let defaults = config.search_defaults();

    info!(
        version = garden_search::VERSION,
        transport = ?config.transport,
        items = catalog.len(),
        "starting garden-search"
    );

    let http = if config.transport.serves_http() {
        let state = Arc::new(AppState::new(catalog.clone(), defaults));
        Some(tokio::spawn(api::serve(config.http_addr, state)))
    } else {
        None
    };

    if config.transport.serves_stdio() {
        let mut server = McpServer::new();
        register_all_tools(&mut server, catalog, defaults);
        // Blocking stdin reads stay off the async worker threads
        tokio::task::spawn_blocking(move || server.run()).await??;

        // Stdio is the primary transport: when it closes, stop HTTP too
        if let Some(http) = http {
            http.abort();
        }
        return Ok(());
    }

    if let Some(http) = http {
        http.await??;
    }
    Ok(())
}
