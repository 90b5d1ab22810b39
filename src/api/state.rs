//! Application state - Dependency injection container.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{ProductStore, UserStore};
use crate::services::{JwtIssuer, ProductManager, ProductService, UserManager, UserService};

/// Application state shared by every handler.
///
/// Services sit behind trait objects so tests can wire in doubles.
#[derive(Clone)]
pub struct AppState {
    /// Product catalogue service
    pub product_service: Arc<dyn ProductService>,
    /// User accounts and login
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            product_service,
            user_service,
        }
    }

    /// Wire the SeaORM-backed stores and the JWT issuer into the services.
    pub fn from_connection(db: Arc<DatabaseConnection>, config: &Config) -> AppResult<Self> {
        let products = Arc::new(ProductStore::new(Arc::clone(&db)));
        let users = Arc::new(UserStore::new(db));
        let tokens = Arc::new(JwtIssuer::new(config)?);

        Ok(Self::new(
            Arc::new(ProductManager::new(products)),
            Arc::new(UserManager::new(users, tokens)),
        ))
    }
}
