//! Error types for the zoo inspector
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur during an inspection
#[derive(Debug, Error)]
pub enum InspectorError {
    /// The zoo collaborator failed (capture, closing, dispatch)
    #[error("Zoo error: {0}")]
    Zoo(String),

    /// The image recognition system could not classify a picture
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// The inspection log rejected the status lines
    #[error("Log error: {0}")]
    Log(String),

    /// Scenario file is malformed or inconsistent
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;
