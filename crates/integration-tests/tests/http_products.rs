//! Integration tests for the product HTTP API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use inventory_integration_tests::TestContext;
use serde_json::json;

// =============================================================================
// Create / List / Show
// =============================================================================

#[tokio::test]
async fn test_create_product_returns_201_with_entity() {
    let ctx = TestContext::new();

    let response = ctx
        .post("/products", json!({ "name": "Widget", "quantity": 5 }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["name"], "Widget");
    assert_eq!(response.body["quantity"], 5);
    assert!(response.body["createdAt"].is_string());
    assert!(response.body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_product_quantity_defaults_to_zero() {
    let ctx = TestContext::new();

    let response = ctx.post("/products", json!({ "name": "Gadget" })).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["quantity"], 0);
}

#[tokio::test]
async fn test_create_product_rejects_blank_name() {
    let ctx = TestContext::new();

    let response = ctx
        .post("/products", json!({ "name": "   ", "quantity": 1 }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        Some("invalid argument: product name cannot be empty")
    );
}

#[tokio::test]
async fn test_create_product_rejects_negative_quantity() {
    let ctx = TestContext::new();

    let response = ctx
        .post("/products", json!({ "name": "Widget", "quantity": -3 }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().is_some());
}

#[tokio::test]
async fn test_create_product_rejects_malformed_json() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = ctx.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().unwrap().starts_with("Bad request:"));
}

#[tokio::test]
async fn test_create_product_rejects_missing_name() {
    let ctx = TestContext::new();

    let response = ctx.post("/products", json!({ "quantity": 2 })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().is_some());
}

#[tokio::test]
async fn test_list_products() {
    let ctx = TestContext::new();

    let empty = ctx.get("/products").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!([]));

    ctx.create_product("Bolt", 10).await;
    ctx.create_product("Nut", 20).await;

    let response = ctx.get("/products").await;
    assert_eq!(response.status, StatusCode::OK);
    let products = response.body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Bolt");
    assert_eq!(products[1]["quantity"], 20);
}

#[tokio::test]
async fn test_show_product_round_trip() {
    let ctx = TestContext::new();
    let id = ctx.create_product("X", 10).await;

    let response = ctx.get(&format!("/products/{id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "X");
    assert_eq!(response.body["quantity"], 10);
}

#[tokio::test]
async fn test_show_unknown_product_is_404() {
    let ctx = TestContext::new();

    let response = ctx.get("/products/404").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), Some("Not found: product 404"));
}

#[tokio::test]
async fn test_show_non_integer_id_is_400() {
    let ctx = TestContext::new();

    let response = ctx.get("/products/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().is_some());
}

// =============================================================================
// Quantity adjustments
// =============================================================================

#[tokio::test]
async fn test_widget_scenario() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Widget", 5).await;

    let response = ctx
        .patch(
            &format!("/products/{id}/increment"),
            json!({ "quantity": 3 }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quantity"], 8);

    let response = ctx
        .patch(
            &format!("/products/{id}/decrement"),
            json!({ "quantity": 20 }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        Some("insufficient stock for product 1: requested 20, available 8")
    );

    let response = ctx.get(&format!("/products/{id}")).await;
    assert_eq!(response.body["quantity"], 8);
}

#[tokio::test]
async fn test_decrement_success() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Gear", 7).await;

    let response = ctx
        .patch(&format!("/products/{id}/decrement"), json!({ "quantity": 7 }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quantity"], 0);
}

#[tokio::test]
async fn test_increment_unknown_product_is_400() {
    let ctx = TestContext::new();

    let response = ctx
        .patch("/products/99/increment", json!({ "quantity": 5 }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("product 99 not found"));
}

#[tokio::test]
async fn test_non_positive_amounts_are_rejected() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Spring", 4).await;

    for action in ["increment", "decrement"] {
        for amount in [0, -1] {
            // Unknown IDs fail on the amount before the lookup.
            for target in [id, 12_345] {
                let response = ctx
                    .patch(
                        &format!("/products/{target}/{action}"),
                        json!({ "quantity": amount }),
                    )
                    .await;
                assert_eq!(response.status, StatusCode::BAD_REQUEST);
                assert!(
                    response
                        .error()
                        .unwrap()
                        .starts_with("invalid argument: amount must be greater than zero"),
                    "{action} {amount} on {target}: {:?}",
                    response.body
                );
            }
        }
    }

    let response = ctx.get(&format!("/products/{id}")).await;
    assert_eq!(response.body["quantity"], 4);
}

#[tokio::test]
async fn test_adjustment_requires_quantity_field() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Cog", 1).await;

    let response = ctx
        .patch(&format!("/products/{id}/increment"), json!({}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().unwrap().starts_with("Bad request:"));
}

#[tokio::test]
async fn test_adjustment_rejects_fractional_quantity() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Cog", 1).await;

    let response = ctx
        .patch(
            &format!("/products/{id}/increment"),
            json!({ "quantity": 1.5 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quantity_never_negative_across_requests() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Washer", 3).await;

    let steps = [
        ("decrement", 2),
        ("decrement", 2),
        ("increment", 1),
        ("decrement", 2),
        ("decrement", 1),
    ];
    for (action, amount) in steps {
        ctx.patch(
            &format!("/products/{id}/{action}"),
            json!({ "quantity": amount }),
        )
        .await;
        let quantity = ctx.get(&format!("/products/{id}")).await.body["quantity"]
            .as_i64()
            .unwrap();
        assert!(quantity >= 0);
    }

    let response = ctx.get(&format!("/products/{id}")).await;
    assert_eq!(response.body["quantity"], 0);
}

#[tokio::test]
async fn test_concurrent_decrements_do_not_oversell() {
    let ctx = TestContext::new();
    let id = ctx.create_product("Limited", 5).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            ctx.patch(&format!("/products/{id}/decrement"), json!({ "quantity": 1 }))
                .await
                .status
        }));
    }

    let mut succeeded = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            succeeded += 1;
        }
    }

    let response = ctx.get(&format!("/products/{id}")).await;
    let remaining = response.body["quantity"].as_i64().unwrap();
    assert!(remaining >= 0);
    assert_eq!(remaining, 5 - succeeded);
}
