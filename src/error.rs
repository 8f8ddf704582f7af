use thiserror::Error;

/// Main error type for the compass pipeline.
#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Empty response from generation endpoint")]
    EmptyResponse,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CompassError>;

impl CompassError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            CompassError::Config(_) => "CONFIG_ERROR",
            CompassError::Api { .. } => "API_ERROR",
            CompassError::Transport(_) => "TRANSPORT_ERROR",
            CompassError::EmptyResponse => "EMPTY_RESPONSE",
            CompassError::Serialization(_) => "SERIALIZATION_ERROR",
            CompassError::Validation(_) => "VALIDATION_ERROR",
            CompassError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }
}
