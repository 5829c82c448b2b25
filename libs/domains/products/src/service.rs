use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product with validation
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.save(Product::new(input)).await
    }

    /// Create a batch of products
    ///
    /// Every element is validated before anything is stored, so one bad
    /// record rejects the whole batch.
    pub async fn create_products(&self, inputs: Vec<CreateProduct>) -> ProductResult<Vec<Product>> {
        for (index, input) in inputs.iter().enumerate() {
            input
                .validate()
                .map_err(|e| ProductError::Validation(format!("item {}: {}", index, e)))?;
        }

        let products = inputs.into_iter().map(Product::new).collect();
        self.repository.save_all(products).await
    }

    /// Delete a product by ID
    ///
    /// Deleting an id that does not exist is not an error.
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            tracing::debug!(product_id = %id, "Delete requested for unknown product");
        }

        Ok(())
    }
}
