//! Logging Config

use std::time::Duration;

use clap::{Args, ValueEnum};

/// How log lines are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals.
    Compact,

    /// One JSON object per event, for log shippers.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` directives win when set
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Request logging settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(
        long = "slow-request-ms",
        env = "SLOW_REQUEST_MS",
        default_value = "1000",
        value_parser = parse_millis
    )]
    pub slow_request_threshold: Duration,
}

fn parse_millis(raw: &str) -> Result<Duration, String> {
    match raw.parse::<u64>() {
        Ok(0) => Err("slow request threshold must be positive".to_string()),
        Ok(millis) => Ok(Duration::from_millis(millis)),
        Err(error) => Err(format!("invalid millisecond count {raw:?}: {error}")),
    }
}
