//! Salary engine HTTP server.
//!
//! Reads the service configuration from the path in `SALARY_ENGINE_CONFIG`
//! (default `config/service.yaml`, falling back to built-in defaults when
//! that file does not exist), then serves the API until Ctrl-C or SIGTERM.

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;
use salary_engine::logging;

const CONFIG_ENV_VAR: &str = "SALARY_ENGINE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/service.yaml";

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => error!(error = %err, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let loader = match ConfigLoader::load_or_default(&config_path) {
        Ok(loader) => loader,
        Err(err) => {
            logging::init("info");
            error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let config = loader.config().clone();
    logging::init(&config.logging.filter);

    let address = config.server.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %address, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    let router = create_router(AppState::in_memory(config));
    info!(address = %address, config = %config_path, "Salary engine listening");

    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Salary engine stopped");
    ExitCode::SUCCESS
}
