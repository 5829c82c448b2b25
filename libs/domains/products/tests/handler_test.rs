//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the products domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    handlers::router(service)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201_with_stored_body() {
    let app = app();

    let body = json!({"id": "p1", "name": "Widget"});
    let response = app.oneshot(post_json("/", body.clone())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response.into_body()).await, body);
}

#[tokio::test]
async fn test_create_product_handler_assigns_id_when_omitted() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "Widget"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product = json_body(response.into_body()).await;
    assert!(product["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(product["name"], "Widget");
}

#[tokio::test]
async fn test_create_product_handler_rejects_malformed_json() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let app = app();

    // Invalid id (empty string)
    let response = app
        .oneshot(post_json("/", json!({"id": "", "name": "Widget"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_handler_returns_200() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    let input: CreateProduct =
        serde_json::from_value(json!({"id": "p1", "name": "Widget"})).unwrap();
    service.create_product(input).await.unwrap();

    let app = handlers::router(service);
    let response = app.oneshot(get("/p1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"id": "p1", "name": "Widget"})
    );
}

#[tokio::test]
async fn test_get_product_handler_returns_404_for_missing() {
    let app = app();

    let response = app.oneshot(get("/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_handler_returns_empty_array() {
    let app = app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_list_products_handler_returns_all_products() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    for id in ["b", "a"] {
        let input: CreateProduct = serde_json::from_value(json!({"id": id})).unwrap();
        service.create_product(input).await.unwrap();
    }

    let app = handlers::router(service);
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!([{"id": "a"}, {"id": "b"}])
    );
}

#[tokio::test]
async fn test_bulk_create_handler_stores_all_products() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    let app = handlers::router(service.clone());

    let response = app
        .oneshot(post_json("/bulk", json!([{"id": "a"}, {"id": "b"}])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response.into_body()).await,
        json!([{"id": "a"}, {"id": "b"}])
    );

    // Both records are retrievable afterwards
    for id in ["a", "b"] {
        let product = service.get_product(id).await.unwrap();
        assert_eq!(product.id, id);
    }
}

#[tokio::test]
async fn test_bulk_create_handler_rejects_invalid_item() {
    let app = app();

    let response = app
        .oneshot(post_json("/bulk", json!([{"id": "a"}, {"id": ""}])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_create_handler_rejects_non_array_body() {
    let app = app();

    let response = app
        .oneshot(post_json("/bulk", json!({"id": "a"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product_handler_returns_204() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);

    let input: CreateProduct = serde_json::from_value(json!({"id": "p1"})).unwrap();
    service.create_product(input).await.unwrap();

    let app = handlers::router(service);
    let response = app.oneshot(delete("/p1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_product_handler_is_204_for_missing_id() {
    let app = app();

    let response = app.oneshot(delete("/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_product_lifecycle_create_get_delete_get() {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    let app = handlers::router(service);

    let body = json!({"id": "p1", "name": "Widget"});

    // Create
    let response = app
        .clone()
        .oneshot(post_json("/", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response.into_body()).await, body);

    // Read back
    let response = app.clone().oneshot(get("/p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, body);

    // Delete
    let response = app.clone().oneshot(delete("/p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app.oneshot(get("/p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
