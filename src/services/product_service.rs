//! Product service - product catalogue use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateProduct, Product};
use crate::errors::AppResult;
use crate::infra::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List all products
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a product and return it with its generated ID
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Get product by ID; absent stays absent
    async fn get_product(&self, id: i32) -> AppResult<Option<Product>>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.list().await
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let mut product = Product::from(input);
        product.id = self.products.create(&product).await?;

        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        self.products.find_by_id(id).await
    }
}
