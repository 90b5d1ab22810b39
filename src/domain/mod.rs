//! Domain layer - Core business entities and wire shapes
//!
//! Stored entities (`Product`, `User`) are kept apart from the request and
//! response shapes exchanged over HTTP.

pub mod password;
pub mod product;
pub mod user;

pub use password::Password;
pub use product::{CreateProduct, Product, ProductResponse};
pub use user::{CreateUser, LoginRequest, LoginResponse, UpdateUser, User, UserResponse};
