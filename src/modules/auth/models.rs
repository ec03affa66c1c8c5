use serde::{Deserialize, Serialize};

use crate::config::TestIdentity;

/// Body of `POST auth/token/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST auth/token/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl From<&TestIdentity> for LoginRequest {
    fn from(identity: &TestIdentity) -> Self {
        Self {
            email: identity.email.clone(),
            password: identity.password.clone(),
        }
    }
}

impl From<&TestIdentity> for RegisterRequest {
    fn from(identity: &TestIdentity) -> Self {
        Self {
            email: identity.email.clone(),
            password: identity.password.clone(),
            name: identity.name.clone(),
        }
    }
}

/// `data` of a successful login or registration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,
}
