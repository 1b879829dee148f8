//! Error types for Paddock

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaddockError {
    // Prediction service errors
    #[error("Prediction service unavailable: {reason}. Try: {remediation}")]
    ServiceUnavailable {
        reason: String,
        remediation: String,
    },

    #[error("Prediction service returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    // Domain errors
    #[error("Race not found: {race_id}")]
    RaceNotFound { race_id: i64 },

    #[error("Invalid prediction request: {reason}")]
    InvalidRequest { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PaddockError {
    fn from(err: serde_json::Error) -> Self {
        PaddockError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaddockError>;
