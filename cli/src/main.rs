//! Logbook CLI
//!
//! Command-line client for the Logbook API server.
//!
//! # Usage
//!
//! ```bash
//! logbook health
//! logbook ingest --level error --message "Failed to connect to DB" --resource-id server-1234
//! logbook query -f level=error -f resourceId=server-1234
//! ```

#![deny(unsafe_code)]

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use shared::models::LogRecord;
use shared::query::FilterSet;

/// Logbook CLI - ingest and query logs on a Logbook server
#[derive(Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API server URL
    #[arg(
        short,
        long,
        env = "LOGBOOK_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API server health
    Health,
    /// Send one log record
    Ingest(IngestArgs),
    /// Retrieve logs matching all given filters
    Query {
        /// Filter as `key=value`, e.g. `level=error` or `metadata.parentResourceId=srv-1`
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
}

#[derive(Args)]
struct IngestArgs {
    /// Severity label
    #[arg(long, default_value = "info")]
    level: String,
    /// Log message
    #[arg(long, default_value = "")]
    message: String,
    /// RFC 3339 timestamp (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    timestamp: Option<DateTime<FixedOffset>>,
    /// Emitting resource ID
    #[arg(long, default_value = "")]
    resource_id: String,
    /// Trace ID
    #[arg(long, default_value = "")]
    trace_id: String,
    /// Span ID
    #[arg(long, default_value = "")]
    span_id: String,
    /// Commit hash
    #[arg(long, default_value = "")]
    commit: String,
    /// Parent resource ID (metadata.parentResourceId)
    #[arg(long, default_value = "")]
    parent_resource_id: String,
}

impl IngestArgs {
    fn into_record(self) -> LogRecord {
        let timestamp = self.timestamp.unwrap_or_else(|| Utc::now().fixed_offset());
        LogRecord::new(self.level, self.message, timestamp)
            .with_resource_id(self.resource_id)
            .with_trace_id(self.trace_id)
            .with_span_id(self.span_id)
            .with_commit(self.commit)
            .with_parent_resource_id(self.parent_resource_id)
    }
}

fn parse_filter(s: &str) -> Result<(String, String)> {
    let Some((key, value)) = s.split_once('=') else {
        bail!("expected key=value, got '{s}'");
    };
    if key.is_empty() {
        bail!("filter key cannot be empty");
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    Ok(shared::models::parse_timestamp(s)?)
}

fn filter_set(filters: Vec<(String, String)>) -> FilterSet {
    let set = filters
        .into_iter()
        .fold(FilterSet::new(), |set, (key, value)| set.with_raw(key, value));
    for key in set.ignored_keys() {
        tracing::warn!(%key, "Unknown filter key will be ignored by the server");
    }
    set
}

/// Turns a non-success response into an error carrying the server's message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("server returned {status}: {body}")
}

async fn run(cli: Cli) -> Result<()> {
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/');

    match cli.command {
        Some(Commands::Health) => {
            let response = client
                .get(format!("{base}/health"))
                .send()
                .await
                .with_context(|| format!("failed to reach {base}"))?;
            let health: serde_json::Value = check(response).await?.json().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Some(Commands::Ingest(args)) => {
            let record = args.into_record();
            let response = client
                .post(format!("{base}/ingest"))
                .json(&record)
                .send()
                .await
                .with_context(|| format!("failed to reach {base}"))?;
            check(response).await?;
            tracing::info!(level = %record.level, "Log record ingested");
        }
        Some(Commands::Query { filters }) => {
            let filters = filter_set(filters);
            let response = client
                .post(format!("{base}/query"))
                .json(&filters)
                .send()
                .await
                .with_context(|| format!("failed to reach {base}"))?;
            let logs: Vec<LogRecord> = check(response).await?.json().await?;
            println!("{}", serde_json::to_string_pretty(&logs)?);
            tracing::info!(count = logs.len(), "Query complete");
        }
        None => {
            println!("Logbook CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}
