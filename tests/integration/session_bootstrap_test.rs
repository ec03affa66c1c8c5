// Session bootstrap
//
// Login first; register when the identity does not exist yet. The token is
// acquired once per run and sent as a bearer header on every later call.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;
use stockroom_fixtures::core::traits::VariableStore;
use stockroom_fixtures::fixtures::FixtureContext;
use stockroom_fixtures::modules::auth::TOKEN_KEY;
use stockroom_fixtures::modules::customers::CustomerRequest;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_token_is_used_as_bearer() {
    let backend = MockBackend::start().await;
    let identity = TestDataFactory::identity();

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/login"))
        .and(body_json(json!({"email": identity.email, "password": identity.password})))
        .respond_with(success(TestDataFactory::token_payload(TestFixtures::TOKEN)))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/customers"))
        .and(header("Authorization", format!("Bearer {}", TestFixtures::TOKEN).as_str()))
        .respond_with(success(json!({"id": TestFixtures::CUSTOMER_ID})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut ctx = backend.context();
    let token = ctx.bootstrap(&identity).await.unwrap();

    assert_eq!(token, TestFixtures::TOKEN);
    assert_eq!(ctx.api().token(), Some(TestFixtures::TOKEN));
    assert_eq!(
        ctx.cache().store().get(TOKEN_KEY),
        Some(json!(TestFixtures::TOKEN))
    );

    ctx.customers()
        .create(&CustomerRequest::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unknown_identity_falls_back_to_registration() {
    let backend = MockBackend::start().await;
    let identity = TestDataFactory::identity();

    backend
        .expect("POST", "auth/token/login", failure(401, "invalid credentials"), 1)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/register"))
        .and(body_json(json!({
            "email": identity.email,
            "password": identity.password,
            "name": identity.name
        })))
        .respond_with(success(TestDataFactory::token_payload("registered-token")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut ctx = backend.context();
    let token = ctx.bootstrap(&identity).await.unwrap();

    assert_eq!(token, "registered-token");
    assert_eq!(
        backend.calls_with_method("POST").await,
        vec!["/api/v1/auth/token/login", "/api/v1/auth/token/register"]
    );
}

#[tokio::test]
async fn test_token_acquired_once_per_run() {
    let backend = MockBackend::start().await;
    backend
        .expect(
            "POST",
            "auth/token/login",
            success(TestDataFactory::token_payload(TestFixtures::TOKEN)),
            1,
        )
        .await;

    let mut ctx = backend.context();
    let identity = TestDataFactory::identity();
    let first = ctx.bootstrap(&identity).await.unwrap();
    let second = ctx.bootstrap(&identity).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.calls().await.len(), 1);
}

#[tokio::test]
async fn test_registration_failure_propagates() {
    let backend = MockBackend::start().await;
    backend
        .expect("POST", "auth/token/login", failure(401, "invalid credentials"), 1)
        .await;
    backend
        .expect("POST", "auth/token/register", failure(409, "email already registered"), 1)
        .await;

    let mut ctx = backend.context();
    let err = ctx
        .bootstrap(&TestDataFactory::identity())
        .await
        .unwrap_err();

    assert_envelope_error(&err, "email already registered");
    assert!(ctx.api().token().is_none());
    assert!(ctx.cache().store().get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn test_token_response_without_access_token_is_rejected() {
    let backend = MockBackend::start().await;
    backend
        .expect(
            "POST",
            "auth/token/login",
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": {"user": {}}})),
            1,
        )
        .await;

    let mut ctx = backend.context();
    let err = ctx
        .bootstrap(&TestDataFactory::identity())
        .await
        .unwrap_err();

    assert!(!err.is_envelope_failure());
    assert!(err.to_string().contains("token response"));
}

#[tokio::test]
async fn test_transport_failure_does_not_attempt_registration() {
    let mut ctx = FixtureContext::from_config(&unreachable_config()).unwrap();

    let err = ctx
        .bootstrap(&TestDataFactory::identity())
        .await
        .unwrap_err();

    assert!(!err.is_envelope_failure());
}

#[tokio::test]
async fn test_scripted_bootstrap_sends_no_bearer_on_login() {
    let client = ScriptedClient::new();
    client.push_success(TestDataFactory::token_payload("scripted-token"));
    client.push_success(json!({"id": "c-1"}));

    let mut ctx = scripted_context(&client);
    ctx.bootstrap(&TestDataFactory::identity()).await.unwrap();
    ctx.customers()
        .create(&CustomerRequest::default())
        .await
        .unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].header_value("Authorization").is_none());
    assert_eq!(requests[0].url, "http://backend.test/api/v1/auth/token/login");
    assert_bearer(&requests[1], "scripted-token");
}
