//! Logbook API Server
//!
//! This crate provides the HTTP server for Logbook. It accepts structured log
//! records, keeps them in an in-memory store, and answers filtered queries.
//!
//! # Architecture
//!
//! The API server is built on Axum and Tokio, providing:
//! - `POST /ingest` to append one log record
//! - `POST /query` to retrieve records matching a filter set
//! - `GET /health` for load balancers
//!
//! The store is created once per server and handed to the routes through
//! [`AppState`]; handlers only hold its lock for the in-memory operation.
//!
//! # Example
//!
//! ```no_run
//! use api::{run_server_with_config, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_server_with_config(Config::from_env()?).await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod routes;
mod state;

pub use config::{Config, LogFormat, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
pub use routes::ErrorResponse;
pub use state::AppState;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Runs the Logbook API server with the provided configuration.
///
/// A fresh in-memory store is created for the lifetime of the server.
/// Handles graceful shutdown on SIGTERM/SIGINT signals.
///
/// # Errors
///
/// Returns an error if:
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: Config) -> Result<()> {
    tracing::info!(
        host = %config.host,
        port = %config.port,
        max_body_bytes = config.max_body_bytes,
        "Logbook API server starting"
    );

    let state = AppState::with_in_memory_store();
    let app = create_router_with_body_limit(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the main application router with all routes and middleware.
///
/// This function is public to allow testing the router without starting a full server.
pub fn create_router(state: AppState) -> Router {
    create_router_with_body_limit(state, DEFAULT_MAX_BODY_BYTES)
}

/// Creates the application router with a custom request body limit.
pub fn create_router_with_body_limit(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::health_routes(state.clone()))
        .merge(routes::ingest_routes(state.clone()))
        .merge(routes::query_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
