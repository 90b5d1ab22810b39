//! Product domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product domain entity. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Database-assigned identifier; `0` until persisted
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl From<CreateProduct> for Product {
    fn from(input: CreateProduct) -> Self {
        Self {
            id: 0,
            name: input.name,
            price: input.price,
        }
    }
}

/// Product creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// Product response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
