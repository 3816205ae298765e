//! Error types for storage, configuration, and host export.

use thiserror::Error;

/// Failures while reading or writing the persisted game record.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The stored text under the save key is not a valid save record.
    #[error("stored save is malformed: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The state could not be encoded as JSON.
    #[error("failed to encode save: {0}")]
    Encode(#[source] serde_json::Error),

    /// The key-value store rejected the operation (quota, disabled storage, ...).
    #[error("storage unavailable: {0}")]
    Storage(String),
}

/// Failures while reading the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Failures while handing data to the embedding host.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode export payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("host rejected sendData: {0}")]
    Host(String),
}
