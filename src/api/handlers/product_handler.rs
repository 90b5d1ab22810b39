//! Product handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateProduct, ProductResponse};
use crate::errors::{AppResult, OptionExt};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/product", post(create_product))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    id: PathId,
) -> AppResult<Json<ProductResponse>> {
    let product = match id.key() {
        Some(id) => state.product_service.get_product(id).await?,
        None => None,
    }
    .ok_or_not_found("Product")?;

    Ok(Json(ProductResponse::from(product)))
}
