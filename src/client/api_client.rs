use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::config::ApiConfig;
use crate::core::traits::{HttpClient, HttpRequest};
use crate::core::{EntityKind, Envelope, FixtureError, Result};

/// Builds backend URLs, attaches the bearer token and checks response envelopes
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, config: ApiConfig) -> Self {
        Self {
            http,
            config,
            token: None,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Request for `path` below the API root, authorized when a token is held
    pub fn request(&self, method: Method, path: &str) -> HttpRequest {
        let request = HttpRequest::new(method, self.config.api_url(path));
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Send a request and unwrap its envelope as `operation`
    pub async fn call(&self, operation: &str, request: HttpRequest) -> Result<Value> {
        let result = match self.http.send(request).await {
            Ok(response) => Envelope::from_body(&response.data).into_data(operation),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!(operation = %operation, error = %e, "API call failed");
        }

        result
    }

    /// `POST` a JSON body to an arbitrary path
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &T,
    ) -> Result<Value> {
        let request = self
            .request(Method::POST, path)
            .json(serde_json::to_value(body)?);
        self.call(operation, request).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, kind: EntityKind, body: &T) -> Result<Value> {
        let operation = format!("create {}", kind.label());
        self.post(&operation, kind.resource_path(), body).await
    }

    pub async fn fetch(&self, kind: EntityKind, id: &str) -> Result<Value> {
        let operation = format!("fetch {}", kind.label());
        let request = self.request(Method::GET, &kind.item_path(id));
        self.call(&operation, request).await
    }

    /// Fetch an entity when an id is at hand; an empty id yields `None`
    pub async fn lookup(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        if id.is_empty() {
            warn!(kind = %kind, "No ID provided for lookup");
            return Ok(None);
        }
        self.fetch(kind, id).await.map(Some)
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        kind: EntityKind,
        id: &str,
        body: &T,
    ) -> Result<Value> {
        let operation = format!("update {}", kind.label());
        let request = self
            .request(Method::PUT, &kind.item_path(id))
            .json(serde_json::to_value(body)?);
        self.call(&operation, request).await
    }

    /// `DELETE` an entity.
    ///
    /// The backend answers 204 with no body on success, so the envelope is
    /// only consulted when a body is present; any non-2xx status fails.
    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<()> {
        let operation = format!("delete {}", kind.label());
        let request = self.request(Method::DELETE, &kind.item_path(id));

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(operation = %operation, error = %e, "API call failed");
                return Err(e);
            }
        };

        let envelope = Envelope::from_body(&response.data);
        let rejected = !response.is_success_status()
            || (!response.data.is_null() && !envelope.is_success());

        if rejected {
            let e = FixtureError::envelope(&operation, envelope.error_message());
            error!(operation = %operation, status = response.status, error = %e, "API call failed");
            return Err(e);
        }

        Ok(())
    }
}
