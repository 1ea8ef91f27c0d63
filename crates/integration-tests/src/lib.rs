//! Integration tests for Inventory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p inventory-integration-tests
//! ```
//!
//! The tests drive the full axum router (middleware included) through
//! `tower::ServiceExt::oneshot` over the in-memory repository, so no database
//! or listening socket is required.
//!
//! # Test Categories
//!
//! - `http_products` - Product API status codes and bodies
//! - `http_health` - Health endpoints and request ID propagation

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use inventory_core::InMemoryProductRepository;
use inventory_server::state::AppState;

/// A router over a fresh, empty in-memory store.
#[derive(Clone)]
pub struct TestContext {
    router: Router,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, or the raw text as a JSON string if it is not JSON.
    pub body: Value,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a context with an empty product store.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(InMemoryProductRepository::new());
        Self {
            router: inventory_server::app(state),
        }
    }

    /// Send a request with an optional JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails, which only
    /// happens when a test is broken.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body readable");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a request with a JSON body (or none).
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        self.send(request).await
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.json(Method::GET, uri, None).await
    }

    /// `POST uri` with a JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.json(Method::POST, uri, Some(body)).await
    }

    /// `PATCH uri` with a JSON body.
    pub async fn patch(&self, uri: &str, body: Value) -> TestResponse {
        self.json(Method::PATCH, uri, Some(body)).await
    }

    /// Create a product and return its ID.
    ///
    /// # Panics
    ///
    /// Panics if creation does not return 201 with an integer `id`.
    pub async fn create_product(&self, name: &str, quantity: i64) -> i64 {
        let response = self
            .post(
                "/products",
                serde_json::json!({ "name": name, "quantity": quantity }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().expect("id is an integer")
    }
}

impl TestResponse {
    /// The `error` message of an error body.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
