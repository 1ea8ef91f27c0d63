//! Product route handlers.
//!
//! Handlers only translate between HTTP and [`ProductService`] calls; all
//! validation happens in the service.
//!
//! [`ProductService`]: inventory_core::ProductService

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

use inventory_core::{InventoryError, Product, ProductId, ProductRepository};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Body of `POST /products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
}

/// Body of `PATCH /products/{id}/increment` and `/decrement`.
#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    pub quantity: i32,
}

/// List all products.
pub async fn index<R: ProductRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Product>>> {
    let products = state.service().list_products().await?;
    Ok(Json(products))
}

/// Create a product.
pub async fn create<R: ProductRepository>(
    State(state): State<AppState<R>>,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(request) = payload?;
    let product = state
        .service()
        .add_product(&request.name, request.quantity)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Show a single product.
pub async fn show<R: ProductRepository>(
    State(state): State<AppState<R>>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    match state.service().get_product(id).await {
        Ok(product) => Ok(Json(product)),
        Err(InventoryError::NotFound(id)) => Err(AppError::NotFound(format!("product {id}"))),
        Err(e) => Err(e.into()),
    }
}

/// Add stock to a product.
pub async fn increment<R: ProductRepository>(
    State(state): State<AppState<R>>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
    payload: std::result::Result<Json<AdjustQuantityRequest>, JsonRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let product = state
        .service()
        .increment_quantity(id, request.quantity)
        .await?;
    Ok(Json(product))
}

/// Remove stock from a product.
pub async fn decrement<R: ProductRepository>(
    State(state): State<AppState<R>>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
    payload: std::result::Result<Json<AdjustQuantityRequest>, JsonRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let product = state
        .service()
        .decrement_quantity(id, request.quantity)
        .await?;
    Ok(Json(product))
}
