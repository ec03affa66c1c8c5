/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Main error type for fixture and API helper operations
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    /// Backend answered but `success` was false or absent
    #[error("Failed to {operation}: {message}")]
    Envelope { operation: String, message: String },

    /// Caller supplied an unusable argument (e.g. empty fixture name)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend reported success but the payload is unusable
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Errors raised by the client middleware stack (retries)
    #[error("HTTP middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl FixtureError {
    pub fn envelope(operation: impl Into<String>, message: impl Into<String>) -> Self {
        FixtureError::Envelope {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        FixtureError::Validation(msg.into())
    }

    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        FixtureError::InvalidPayload(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        FixtureError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        FixtureError::Internal(msg.into())
    }

    /// True when the backend rejected the call (as opposed to a transport failure)
    pub fn is_envelope_failure(&self) -> bool {
        matches!(self, FixtureError::Envelope { .. })
    }
}
