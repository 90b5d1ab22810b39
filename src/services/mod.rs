//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod product_service;
mod token_issuer;
mod user_service;

// Service traits and implementations
pub use product_service::{ProductManager, ProductService};
pub use token_issuer::{Claims, JwtIssuer, TokenIssuer};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use token_issuer::MockTokenIssuer;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
