//! Product repository implementation.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products; empty when there are none
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Find product by ID; `None` when no row matches
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Insert a product and return the generated ID
    async fn create(&self, product: &Product) -> AppResult<i32>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, product: &Product) -> AppResult<i32> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(product.name.clone()),
            price: Set(product.price),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(model.id)
    }
}
