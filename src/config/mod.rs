use crate::core::{FixtureError, Result};
use serde::Deserialize;
use std::env;

pub mod api;
pub mod identity;

pub use api::ApiConfig;
pub use identity::TestIdentity;

/// Configuration for a fixture run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub identity: TestIdentity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the smoke binary's log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = FixtureError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(FixtureError::Configuration(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: lookup("LOG_FORMAT")
                    .map(|value| value.parse::<LogFormat>())
                    .transpose()?
                    .unwrap_or_default(),
            },
            api: ApiConfig::from_vars(&lookup)?,
            identity: TestIdentity::from_vars(&lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(FixtureError::Configuration(
                "BASE_URL must not be empty".to_string(),
            ));
        }

        if self.api.api_version.trim().is_empty() {
            return Err(FixtureError::Configuration(
                "API_VERSION must not be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(FixtureError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }

        if self.identity.email.is_empty() || self.identity.password.is_empty() {
            return Err(FixtureError::Configuration(
                "Test user email and password must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
