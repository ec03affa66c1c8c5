// Mock Backend
//
// Wraps a wiremock server that speaks the backend's `{success, data|error}`
// envelope, plus shortcuts for building contexts pointed at it.

use serde_json::{json, Value};
use stockroom_fixtures::config::ApiConfig;
use stockroom_fixtures::fixtures::FixtureContext;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Envelope for a successful call
pub fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data}))
}

/// Envelope for a created entity (201)
pub fn created(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({"success": true, "data": data}))
}

/// Envelope for a rejected call
pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({"success": false, "error": message}))
}

/// 204 with no body, as the backend answers deletions
pub fn no_content() -> ResponseTemplate {
    ResponseTemplate::new(204)
}

pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(self.server.uri(), "v1")
    }

    /// Fresh context with its own cache, not yet authorized
    pub fn context(&self) -> FixtureContext {
        FixtureContext::from_config(&self.config()).expect("Failed to build fixture context")
    }

    /// Mount a response for `METHOD /api/v1/{api_path}` expected `times` times
    pub async fn expect(&self, http_method: &str, api_path: &str, response: ResponseTemplate, times: u64) {
        Mock::given(method(http_method))
            .and(path(format!("/api/v1/{}", api_path)))
            .respond_with(response)
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far, as `(METHOD, path)` pairs
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| (request.method.to_string(), request.url.path().to_string()))
            .collect()
    }

    /// Calls with the given method, in arrival order
    pub async fn calls_with_method(&self, http_method: &str) -> Vec<String> {
        self.calls()
            .await
            .into_iter()
            .filter(|(m, _)| m == http_method)
            .map(|(_, p)| p)
            .collect()
    }
}

/// Address nothing listens on, for transport failures
pub fn unreachable_config() -> ApiConfig {
    let mut config = ApiConfig::new("http://127.0.0.1:9", "v1");
    config.timeout_secs = 2;
    config
}
