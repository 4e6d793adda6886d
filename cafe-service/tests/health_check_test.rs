//! Health probe and middleware integration tests.

mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "cafe-service");
    assert!(body["cities"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.headers().contains_key("x-request-id"));

    let response = client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "test-id-123")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.headers()["x-request-id"],
        "test-id-123",
        "client-supplied request id should be echoed back"
    );
}
