use polars::prelude::PolarsError;

/// Failures outside the core pipeline: reading the export and emitting output.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("parse csv: {0}")]
    Csv(#[from] PolarsError),
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
