use crate::config::ConfigError;
use crate::poverty::{CalculationError, DatasetImportError};
use crate::telemetry::TelemetryError;

/// Application-level error for the CLI surface, folding together the startup
/// and runtime failures the binary can hit.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetImportError),
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
