//! Numeric path id extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// The `:id` path segment parsed as a 64-bit integer.
///
/// A non-numeric segment rejects with `BadRequest` (400) so the service is
/// never called. Numbers outside the `i32` key range are valid ids that
/// simply match no row; see [`PathId::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl PathId {
    /// Primary key to look up, or `None` when no row can have this id
    pub fn key(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_id(&raw).map(PathId)
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("'{}' is not a numeric id", raw)))
}
