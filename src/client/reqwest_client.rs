use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::core::traits::{HttpClient, HttpRequest, HttpResponse};
use crate::core::Result;

/// Default transport: reqwest behind the middleware stack with transient retries
pub struct ReqwestHttpClient {
    client: ClientWithMiddleware,
}

impl ReqwestHttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        // Retries are off unless HTTP_MAX_RETRIES says otherwise
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(
            method = %request.method,
            url = %request.url,
            status = status,
            "Received API response"
        );

        Ok(HttpResponse {
            status,
            data: decode_body(text),
        })
    }
}

/// Empty bodies (204) become `Null`; bodies that are not JSON are kept as text
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
}
