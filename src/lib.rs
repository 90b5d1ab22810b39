//! Storefront API - products, users and token login over HTTP
//!
//! Requests flow through three layers, each behind a narrow trait:
//! handler (`api`) → service (`services`) → repository (`infra`).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, wire shapes and the `Password` value object
//! - **services**: Business rules and token issuance
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! storefront-api serve --port 8000
//!
//! # Inspect migrations
//! storefront-api migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Password, Product, User};
pub use errors::{AppError, AppResult};
