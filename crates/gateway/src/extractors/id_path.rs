//! Integer id path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;
use domain::UserId;

/// Message returned when the `:id` segment is not an integer
pub const NUMERIC_ID_EXPECTED: &str = "Validation failed (numeric string is expected)";

/// Extractor for the `:id` path parameter.
///
/// Rejects anything that does not parse as an integer with a 400.
pub struct IdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        raw.trim()
            .parse::<UserId>()
            .map(IdPath)
            .map_err(|_| AppError::bad_request(NUMERIC_ID_EXPECTED))
    }
}
