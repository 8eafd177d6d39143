//! Router-level tests that run without a live database: health, fallback,
//! and the validation rejects that fire before any query.

use axum::http::StatusCode;
use uuid::Uuid;

use crate::common::{TestClient, build_test_state};

fn test_client() -> TestClient {
    let state = build_test_state();
    TestClient::new(pb_api::router::router().with_state(state))
}

#[tokio::test]
async fn health_returns_ok() {
    let client = test_client();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let client = test_client();
    let response = client.get("/definitely-not-a-route").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_subject_is_rejected() {
    let client = test_client();
    let uri = format!("/practice/{}/answer", Uuid::new_v4());
    let response = client
        .post_json(&uri, r#"{"subject": "", "correct": true}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body_string().contains("error"));
}

#[tokio::test]
async fn markup_in_subject_is_rejected() {
    let client = test_client();
    let uri = format!("/practice/{}/answer", Uuid::new_v4());
    let response = client
        .post_json(&uri, r#"{"subject": "<script>alert(1)</script>", "correct": false}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mock_accuracy_above_100_is_rejected() {
    let client = test_client();
    let uri = format!("/mocks/{}/complete", Uuid::new_v4());
    let response = client.post_json(&uri, r#"{"accuracy": 101}"#).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_mock_accuracy_is_rejected() {
    let client = test_client();
    let uri = format!("/mocks/{}/complete", Uuid::new_v4());
    let response = client.post_json(&uri, r#"{"accuracy": -5}"#).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    use axum::{body::Body, http::Request};
    use pb_api::middleware::request_id::{REQUEST_ID_HEADER, request_id_middleware};

    let state = build_test_state();
    let router = pb_api::router::router()
        .with_state(state)
        .layer(axum::middleware::from_fn(request_id_middleware));
    let client = TestClient::new(router);

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "corr-id-123")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = client.request(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("x-request-id").map(|v| v.to_str().unwrap()),
        Some("corr-id-123")
    );
}

#[tokio::test]
async fn malformed_user_id_is_rejected() {
    let client = test_client();
    let response = client
        .post_json("/practice/not-a-uuid/answer", r#"{"subject": "Maths", "correct": true}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
