//! Unified error handling for the HTTP API.
//!
//! Provides a single error type that converts from domain errors and renders
//! as an Axum response with a `{ statusCode, message, error }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    BadRequest(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    status_code: u16,
    message: ErrorMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// A single message, or one per failed validation constraint
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short reason phrase placed in the `error` field.
    ///
    /// Not-found responses carry only the message.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            AppError::NotFound(_) => None,
            _ => self.status().canonical_reason(),
        }
    }

    /// Get user-facing message
    fn user_message(&self) -> ErrorMessage {
        match self {
            AppError::Validation(messages) => ErrorMessage::Many(messages.clone()),
            AppError::NotFound(msg) | AppError::BadRequest(msg) => ErrorMessage::One(msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status_code: status.as_u16(),
            message: self.user_message(),
            error: self.reason(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(vec![msg]),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body_has_no_error_field() {
        let (status, body) = body_json(DomainError::user_not_found().into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"statusCode": 404, "message": "user with that id not found"})
        );
    }

    #[tokio::test]
    async fn test_validation_body_lists_messages() {
        let err = AppError::Validation(vec![
            "age must not be less than 13".to_string(),
            "name should not be empty".to_string(),
        ]);
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "statusCode": 400,
                "message": ["age must not be less than 13", "name should not be empty"],
                "error": "Bad Request"
            })
        );
    }

    #[tokio::test]
    async fn test_bad_request_body_has_single_message() {
        let (status, body) = body_json(AppError::bad_request("bad id")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"statusCode": 400, "message": "bad id", "error": "Bad Request"})
        );
    }

    #[test]
    fn test_domain_validation_becomes_single_entry_list() {
        let err = AppError::from(DomainError::validation("unknown role"));
        assert!(matches!(err, AppError::Validation(ref m) if m == &vec!["unknown role".to_string()]));
    }
}
