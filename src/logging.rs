// src/logging.rs
// =============================================================================
// Log configuration.
//
// Diagnostics go through `tracing`. Everything is written to stderr so that
// `--json` output on stdout stays machine-readable.
//
// The filter comes from RUST_LOG when set, e.g.
//   RUST_LOG=github_lookup=debug github-lookup user octocat
// =============================================================================

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const DEFAULT_ENV_CONFIG: &str = "warn,github_lookup=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not set tracing global default subscriber,\n  caused by: {source}")]
    SetGlobalDefault {
        source: tracing::subscriber::SetGlobalDefaultError,
    },

    #[error("Wrong env filter configuration: {configuration}\n  caused by: {source}")]
    EnvFilterConfiguration {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Installs the global tracing subscriber.
pub fn configure_logging() -> Result<(), LoggingError> {
    let log_config =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string());
    let filter_layer = build_filter(&log_config)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::SetGlobalDefault { source })
}

fn build_filter(configuration: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::from_str(configuration).map_err(|source| LoggingError::EnvFilterConfiguration {
        source,
        configuration: configuration.to_string(),
    })
}
