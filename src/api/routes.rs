//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{auth_routes, product_routes, user_routes};
use super::AppState;
use crate::types::MessageResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/ping", get(ping))
        .merge(product_routes())
        .merge(user_routes())
        .merge(auth_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Ping endpoint
async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("Pong"))
}
