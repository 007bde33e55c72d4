//! Integration tests for `InferenceClient` against a mocked backend.

use std::{net::TcpListener, time::Duration};

use placement_evaluator::RawInputs;
use placement_remote::{InferenceClient, InferenceConfig, InferenceError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn client_for(uri: &str) -> InferenceClient {
    let config = InferenceConfig::default()
        .with_url(uri)
        .with_timeout(Duration::from_millis(500));
    InferenceClient::new(config).expect("failed to create client")
}

/// Returns a base URL on which nothing is listening.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_prediction_one_is_placed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(serde_json::json!({"iq": 120, "cgpa": 8.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"prediction": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let verdict = client_for(&server.uri())
        .predict(RawInputs::new(120.0, 8.5))
        .await
        .expect("predict failed");

    assert!(verdict.placed);
}

#[tokio::test]
async fn test_prediction_zero_is_not_placed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"prediction": 0})))
        .mount(&server)
        .await;

    let verdict = client_for(&server.uri())
        .predict(RawInputs::new(70.0, 5.0))
        .await
        .expect("predict failed");

    assert!(!verdict.placed);
}

#[tokio::test]
async fn test_unexpected_prediction_value_is_not_placed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"prediction": 7})))
        .mount(&server)
        .await;

    let verdict = client_for(&server.uri())
        .predict(RawInputs::default())
        .await
        .expect("predict failed");

    assert!(!verdict.placed);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .predict(RawInputs::default())
        .await
        .unwrap_err();

    match err {
        InferenceError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({"detail": []})))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .predict(RawInputs::new(-5.0, 11.0))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Status { .. }), "{err}");
    assert!(!err.is_unreachable());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .predict(RawInputs::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::MalformedBody { .. }), "{err}");
}

#[tokio::test]
async fn test_missing_prediction_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"placed": true})))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .predict(RawInputs::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::MalformedBody { .. }), "{err}");
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"prediction": 1}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .predict(RawInputs::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Timeout { .. }), "{err}");
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn test_connection_refused() {
    let err = client_for(&unreachable_url())
        .predict(RawInputs::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Transport { .. }), "{err}");
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Hello World"})),
        )
        .mount(&server)
        .await;

    let status = client_for(&server.uri()).health().await.expect("health failed");

    assert_eq!(status.message.as_deref(), Some("Hello World"));
}
