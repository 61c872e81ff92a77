use std::path::PathBuf;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Errors surfaced by the CLI edge; the engine itself is total and produces
/// none of these.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    EncodeOutput(#[from] serde_json::Error),
}
