//! Integration tests for health endpoints and request ID propagation.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use inventory_integration_tests::TestContext;
use inventory_server::middleware::REQUEST_ID_HEADER;

#[tokio::test]
async fn test_liveness() {
    let ctx = TestContext::new();

    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_readiness_with_in_memory_store() {
    let ctx = TestContext::new();

    let response = ctx.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let ctx = TestContext::new();

    let response = ctx.get("/inventory").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let ctx = TestContext::new();

    let response = ctx.get("/health").await;

    let id = response.headers.get(REQUEST_ID_HEADER).unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .uri("/products")
        .header(REQUEST_ID_HEADER, "req-abc-123")
        .body(Body::empty())
        .unwrap();
    let response = ctx.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(REQUEST_ID_HEADER).unwrap(),
        "req-abc-123"
    );
}

#[tokio::test]
async fn test_request_id_on_error_responses() {
    let ctx = TestContext::new();

    let response = ctx.get("/products/1").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.headers.contains_key(REQUEST_ID_HEADER));
}
