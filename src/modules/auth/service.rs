use serde_json::Value;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::config::TestIdentity;
use crate::core::traits::VariableStore;
use crate::core::{FixtureError, Result};

use super::models::{LoginRequest, RegisterRequest, TokenResponse};

/// Store key holding the bearer token for the run
pub const TOKEN_KEY: &str = "jwt_token";

/// Acquires the run's bearer token: login first, register when the test
/// identity does not exist yet.
pub struct AuthService<'a, S: VariableStore> {
    api: &'a mut ApiClient,
    store: &'a mut S,
}

impl<'a, S: VariableStore> AuthService<'a, S> {
    pub fn new(api: &'a mut ApiClient, store: &'a mut S) -> Self {
        Self { api, store }
    }

    /// Make sure the API client carries a token, acquiring one at most once
    /// per run.
    pub async fn bootstrap(&mut self, identity: &TestIdentity) -> Result<String> {
        if let Some(token) = self.cached_token() {
            debug!("Reusing cached session token");
            self.api.set_token(token.clone());
            return Ok(token);
        }

        let token = match self.login(identity).await {
            Ok(token) => token,
            Err(e) if e.is_envelope_failure() => {
                info!(email = %identity.email, error = %e, "Login rejected, registering test user");
                self.register(identity).await?
            }
            Err(e) => return Err(e),
        };

        self.store.set(TOKEN_KEY, Value::String(token.clone()));
        self.api.set_token(token.clone());

        Ok(token)
    }

    fn cached_token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .and_then(|value| value.as_str().map(str::to_string))
            .filter(|token| !token.is_empty())
    }

    async fn login(&self, identity: &TestIdentity) -> Result<String> {
        info!(email = %identity.email, "Logging in test user");
        let data = self
            .api
            .post("log in test user", "auth/token/login", &LoginRequest::from(identity))
            .await?;
        let token = access_token(data)?;
        info!("Test user logged in");
        Ok(token)
    }

    async fn register(&self, identity: &TestIdentity) -> Result<String> {
        info!(email = %identity.email, "Registering test user");
        let data = self
            .api
            .post(
                "register test user",
                "auth/token/register",
                &RegisterRequest::from(identity),
            )
            .await?;
        let token = access_token(data)?;
        info!("Test user registered");
        Ok(token)
    }
}

fn access_token(data: Value) -> Result<String> {
    let response: TokenResponse = serde_json::from_value(data)
        .map_err(|e| FixtureError::invalid_payload(format!("token response: {}", e)))?;

    if response.access_token.is_empty() {
        return Err(FixtureError::invalid_payload("token response has empty accessToken"));
    }

    Ok(response.access_token)
}
