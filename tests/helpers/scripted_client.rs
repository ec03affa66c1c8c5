// Scripted HTTP Client
//
// In-process HttpClient that answers from a queue of canned responses and
// records every request, for tests that need no real HTTP.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use stockroom_fixtures::client::ApiClient;
use stockroom_fixtures::config::ApiConfig;
use stockroom_fixtures::core::traits::{HttpClient, HttpRequest, HttpResponse, MemoryStore};
use stockroom_fixtures::fixtures::FixtureContext;
use stockroom_fixtures::{FixtureError, Result};

#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, data: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, data }));
    }

    pub fn push_success(&self, data: Value) {
        self.push(200, json!({"success": true, "data": data}));
    }

    pub fn push_failure(&self, status: u16, message: &str) {
        self.push(status, json!({"success": false, "error": message}));
    }

    pub fn push_error(&self, error: FixtureError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(FixtureError::internal(format!(
                "no scripted response for {} {}",
                request.method, request.url
            )))
        })
    }
}

/// Context backed by `client` and a fresh in-memory store
pub fn scripted_context(client: &Arc<ScriptedClient>) -> FixtureContext<MemoryStore> {
    let http: Arc<dyn HttpClient> = client.clone();
    FixtureContext::new(
        ApiClient::new(http, ApiConfig::new("http://backend.test", "v1")),
        MemoryStore::new(),
    )
}
