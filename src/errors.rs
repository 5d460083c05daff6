use thiserror::Error;

/// Error type that captures report computation failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),
    #[error("Query source error: {0}")]
    Source(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
