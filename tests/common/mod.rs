//! Shared fixtures for the integration tests.
//!
//! In-memory repositories stand in for PostgreSQL; everything above them
//! (services, token issuer, router) is the real thing.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use storefront_api::config::Config;
use storefront_api::domain::{Product, User};
use storefront_api::errors::{AppError, AppResult};
use storefront_api::infra::{ProductRepository, UserRepository};
use storefront_api::services::{JwtIssuer, ProductManager, UserManager};
use storefront_api::{create_router, AppState};

pub const JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Products kept in insertion order with serial IDs starting at 1
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: &Product) -> AppResult<i32> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map_or(1, |p| p.id + 1);
        rows.push(Product {
            id,
            ..product.clone()
        });
        Ok(id)
    }
}

/// Users with serial IDs; update/delete of a missing ID is a silent no-op
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
}

impl InMemoryUsers {
    pub fn stored(&self, id: i32) -> Option<User> {
        self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = self.rows.lock().unwrap().clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.stored(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> AppResult<i32> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(User {
            id: *next_id,
            ..user.clone()
        });
        Ok(*next_id)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

/// Product repository whose every call fails like a lost connection
pub struct UnreachableProducts;

#[async_trait]
impl ProductRepository for UnreachableProducts {
    async fn list(&self) -> AppResult<Vec<Product>> {
        Err(AppError::Database(sea_orm::DbErr::Custom(
            "connection refused".to_string(),
        )))
    }

    async fn find_by_id(&self, _id: i32) -> AppResult<Option<Product>> {
        Err(AppError::Database(sea_orm::DbErr::Custom(
            "connection refused".to_string(),
        )))
    }

    async fn create(&self, _product: &Product) -> AppResult<i32> {
        Err(AppError::Database(sea_orm::DbErr::Custom(
            "connection refused".to_string(),
        )))
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(JWT_SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Router over the given repositories with a real JWT issuer
pub fn app_with(
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
) -> Router {
    let tokens = Arc::new(JwtIssuer::new(&test_config()).unwrap());
    let state = AppState::new(
        Arc::new(ProductManager::new(products)),
        Arc::new(UserManager::new(users, tokens)),
    );
    create_router(state)
}

/// Router over fresh, empty in-memory repositories
pub fn app() -> Router {
    app_with(
        Arc::new(InMemoryProducts::default()),
        Arc::new(InMemoryUsers::default()),
    )
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
