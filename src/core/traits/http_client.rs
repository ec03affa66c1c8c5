use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::core::Result;

/// Transport used by every API helper.
///
/// The crate ships [`crate::client::ReqwestHttpClient`]; tests swap in
/// scripted implementations.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and return the decoded response.
    ///
    /// Only transport-level failures are errors here. Non-2xx statuses and
    /// `success: false` bodies come back as a normal [`HttpResponse`].
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body and the matching content type
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self.header("Content-Type", "application/json")
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Decoded response: status code plus the JSON body (`Value::Null` when empty)
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub data: Value,
}

impl HttpResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
