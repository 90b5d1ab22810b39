//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{LoginRequest, LoginResponse};
use crate::errors::AppResult;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login and get a JWT
///
/// Unknown email and wrong password both answer 401 with the same body.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state.user_service.login(payload).await?;
    Ok(Json(LoginResponse { token }))
}
