use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{FixtureError, Result};

/// Fallback message when the backend omits `error`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Uniform backend response wrapper: `{success, data|error}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Read an envelope out of a response body.
    ///
    /// Bodies that are not objects (empty, plain text, arrays) produce an
    /// empty envelope, which counts as a failure.
    pub fn from_body(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Backend message, or the fallback when none was given
    pub fn error_message(&self) -> String {
        self.error
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string()
    }

    /// Unwrap `data`, treating anything but `success: true` as a failure of
    /// `operation`. The HTTP status is deliberately not consulted.
    pub fn into_data(self, operation: &str) -> Result<Value> {
        if !self.is_success() {
            return Err(FixtureError::envelope(operation, self.error_message()));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}
