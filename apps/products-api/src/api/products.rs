//! Products API routes

use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, ProductService};

/// Create products router backed by the in-memory store
pub fn router() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}
