//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health                    - Liveness check
//! GET   /health/ready              - Readiness check (store reachable)
//!
//! # Products (JSON)
//! GET   /products                  - List products
//! POST  /products                  - Create product {name, quantity?}
//! GET   /products/{id}             - Product detail
//! PATCH /products/{id}/increment   - Add stock {quantity}
//! PATCH /products/{id}/decrement   - Remove stock {quantity}
//! ```

pub mod health;
pub mod products;

use axum::{
    Router,
    routing::{get, patch},
};

use inventory_core::ProductRepository;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes<R: ProductRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route("/", get(products::index::<R>).post(products::create::<R>))
        .route("/{id}", get(products::show::<R>))
        .route("/{id}/increment", patch(products::increment::<R>))
        .route("/{id}/decrement", patch(products::decrement::<R>))
}

/// Create the health check routes router.
pub fn health_routes<R: ProductRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness::<R>))
}

/// Create all routes for the server.
pub fn routes<R: ProductRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/products", product_routes())
}
