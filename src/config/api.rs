use std::time::Duration;

use serde::Deserialize;

use crate::core::{FixtureError, Result};

/// Where the backend lives and how the HTTP client talks to it
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: api_version.into(),
            timeout_secs: 30,
            max_retries: 0,
        }
    }

    pub fn from_vars<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ApiConfig {
            base_url: lookup("BASE_URL").unwrap_or_else(|| "http://localhost:8080".to_string()),
            api_version: lookup("API_VERSION").unwrap_or_else(|| "v1".to_string()),
            timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| FixtureError::configuration("Invalid HTTP_TIMEOUT_SECS"))?,
            max_retries: lookup("HTTP_MAX_RETRIES")
                .unwrap_or_else(|| "0".to_string())
                .parse()
                .map_err(|_| FixtureError::configuration("Invalid HTTP_MAX_RETRIES"))?,
        })
    }

    /// Absolute URL for a path below `/api/{version}/`
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
