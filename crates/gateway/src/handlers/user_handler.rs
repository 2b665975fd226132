//! User handlers.

use std::borrow::Cow;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::{AppError, AppResult};
use domain::{is_valid_role, CreateUser, UpdateUser, User, UserRole, VALID_ROLES};

use crate::extractors::{IdPath, ValidatedJson};
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(
        required(message = "name must be a string"),
        length(min = 1, message = "name should not be empty")
    )]
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Age in years, at least 13
    #[validate(
        required(message = "age must be an integer number"),
        range(min = 13, message = "age must not be less than 13")
    )]
    #[schema(example = 22)]
    pub age: Option<i64>,
    /// One of TEACHER, STUDENT, ADMIN
    #[validate(
        required(message = "role must be one of the following values: TEACHER, STUDENT, ADMIN"),
        custom(function = "validate_role")
    )]
    #[schema(example = "STUDENT")]
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Convert a validated request into store input.
    pub fn into_input(self) -> AppResult<CreateUser> {
        let name = self
            .name
            .ok_or_else(|| AppError::validation("name must be a string"))?;
        let age = self
            .age
            .ok_or_else(|| AppError::validation("age must be an integer number"))?;
        let role = self
            .role
            .ok_or_else(|| AppError::validation(role_message()))?
            .parse::<UserRole>()?;

        Ok(CreateUser { name, age, role })
    }
}

/// User update request with validation; every field is optional
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "name should not be empty"))]
    #[schema(example = "Jane")]
    pub name: Option<String>,
    /// New age, at least 13
    #[validate(range(min = 13, message = "age must not be less than 13"))]
    #[schema(example = 27)]
    pub age: Option<i64>,
    /// New role
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "ADMIN")]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// Convert a validated request into a patch.
    pub fn into_patch(self) -> AppResult<UpdateUser> {
        let role = self.role.map(|r| r.parse::<UserRole>()).transpose()?;

        Ok(UpdateUser {
            name: self.name,
            age: self.age,
            role,
        })
    }
}

fn role_message() -> String {
    format!(
        "role must be one of the following values: {}",
        VALID_ROLES.join(", ")
    )
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if is_valid_role(role) {
        return Ok(());
    }
    let mut error = ValidationError::new("role");
    error.message = Some(Cow::Owned(role_message()));
    Err(error)
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
///
/// An unknown id answers 200 with an empty body.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record, or empty body when no user has this id", body = User),
        (status = 400, description = "Id is not an integer")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Response> {
    let response = match state.user_service.get_user(id).await? {
        Some(user) => Json(user).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the supplied fields of a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(id, payload.into_patch()?)
        .await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted, or no user had this id"),
        (status = 400, description = "Id is not an integer")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::collect_messages;

    #[test]
    fn test_create_request_reports_every_failed_field() {
        let request = CreateUserRequest {
            name: Some(String::new()),
            age: Some(12),
            role: Some("JANITOR".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            collect_messages(&errors),
            vec![
                "age must not be less than 13".to_string(),
                "name should not be empty".to_string(),
                "role must be one of the following values: TEACHER, STUDENT, ADMIN".to_string(),
            ]
        );
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let request = CreateUserRequest {
            name: None,
            age: None,
            role: None,
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(collect_messages(&errors).len(), 3);
    }

    #[test]
    fn test_create_request_into_input() {
        let request = CreateUserRequest {
            name: Some("Alice".to_string()),
            age: Some(22),
            role: Some("STUDENT".to_string()),
        };
        assert!(request.validate().is_ok());

        let input = request.into_input().unwrap();
        assert_eq!(
            input,
            CreateUser {
                name: "Alice".to_string(),
                age: 22,
                role: UserRole::Student,
            }
        );
    }

    #[test]
    fn test_empty_update_request_is_valid() {
        let request = UpdateUserRequest::default();
        assert!(request.validate().is_ok());
        assert!(request.into_patch().unwrap().is_empty());
    }

    #[test]
    fn test_update_request_rejects_low_age() {
        let request = UpdateUserRequest {
            age: Some(0),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            collect_messages(&errors),
            vec!["age must not be less than 13".to_string()]
        );
    }
}
