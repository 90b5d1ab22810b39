//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    Ok(Json(state.user_service.list_users().await?))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    id: PathId,
) -> AppResult<Json<UserResponse>> {
    let user = match id.key() {
        Some(id) => state.user_service.get_user(id).await?,
        None => None,
    }
    .ok_or_not_found("User")?;

    Ok(Json(user))
}

/// Partially update a user
///
/// A missing user is reported as a server error, not 404.
pub async fn update_user(
    State(state): State<AppState>,
    id: PathId,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<StatusCode> {
    let Some(id) = id.key() else {
        return Err(AppError::internal("User not found"));
    };

    state
        .user_service
        .update_user(id, payload)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::internal(msg),
            other => other,
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    id: PathId,
) -> AppResult<StatusCode> {
    // An id outside the key range cannot match a row; deleting it is a no-op
    if let Some(id) = id.key() {
        state.user_service.delete_user(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
