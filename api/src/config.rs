//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{bail, Context, Result};

/// Default port, matching the port existing ingestion clients post to.
pub const DEFAULT_PORT: u16 = 3000;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Output format for the server's own logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format '{other}', expected 'text' or 'json'"),
        }
    }
}

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `LOGBOOK_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `LOGBOOK_PORT`: The port to listen on (default: 3000)
/// - `LOGBOOK_MAX_BODY_BYTES`: Maximum accepted request body size (default: 1 MiB)
/// - `LOGBOOK_LOG_FORMAT`: `text` or `json` (default: text)
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
    /// Output format for server logs.
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("LOGBOOK_HOST").unwrap_or(defaults.host);

        let port = lookup("LOGBOOK_PORT")
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("LOGBOOK_PORT must be a port number")?
            .unwrap_or(defaults.port);

        let max_body_bytes = lookup("LOGBOOK_MAX_BODY_BYTES")
            .map(|n| n.parse::<usize>())
            .transpose()
            .context("LOGBOOK_MAX_BODY_BYTES must be a byte count")?
            .unwrap_or(defaults.max_body_bytes);

        let log_format = lookup("LOGBOOK_LOG_FORMAT")
            .map(|f| f.parse::<LogFormat>())
            .transpose()?
            .unwrap_or(defaults.log_format);

        Ok(Self {
            host,
            port,
            max_body_bytes,
            log_format,
        })
    }

    /// Returns the `host:port` string used for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::Text,
        }
    }
}
