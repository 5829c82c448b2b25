use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get every live product
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by id; `None` on a miss, not an error
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Insert or replace the record at `product.id`; returns the stored value
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Apply `save` to each element; no cross-record atomicity is promised
    /// by this contract
    async fn save_all(&self, products: Vec<Product>) -> ProductResult<Vec<Product>>;

    /// Remove the record if present; `Ok(false)` when the id was absent
    async fn delete_by_id(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository.
///
/// Concurrent reads, serialized writes per the RwLock. Listings are sorted
/// by id so output is deterministic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(result)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());

        tracing::info!(product_id = %product.id, "Stored product");
        Ok(product)
    }

    async fn save_all(&self, batch: Vec<Product>) -> ProductResult<Vec<Product>> {
        // One write lock for the whole batch
        let mut products = self.products.write().await;
        for product in &batch {
            products.insert(product.id.clone(), product.clone());
        }

        tracing::info!(count = batch.len(), "Stored product batch");
        Ok(batch)
    }

    async fn delete_by_id(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
