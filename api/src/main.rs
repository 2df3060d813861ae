//! Logbook API Server Binary
//!
//! Entry point for the Logbook log ingestion and query server.

#![deny(unsafe_code)]

use anyhow::Result;
use api::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    api::init_tracing(config.log_format);

    api::run_server_with_config(config).await
}
