use serde::{Deserialize, Serialize};

use crate::core::{FixtureError, Result};

/// Fixed test user the session bootstrap logs in (or registers) as
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestIdentity {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl TestIdentity {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    pub fn from_vars<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(TestIdentity {
            email: lookup("TEST_USER_EMAIL")
                .ok_or_else(|| FixtureError::configuration("TEST_USER_EMAIL not set"))?,
            password: lookup("TEST_USER_PASSWORD")
                .ok_or_else(|| FixtureError::configuration("TEST_USER_PASSWORD not set"))?,
            name: lookup("TEST_USER_NAME").unwrap_or_else(|| "Test User".to_string()),
        })
    }
}
