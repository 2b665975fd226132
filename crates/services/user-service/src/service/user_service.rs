//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{CreateUser, UpdateUser, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID; `None` when no such user exists
    async fn get_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a new user from already validated input
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Update the supplied fields; fails with `NotFound` for an unknown id
    async fn update_user(&self, id: UserId, patch: UpdateUser) -> AppResult<User>;

    /// Delete user; an unknown id is not an error
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await)
    }

    async fn get_user(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.repo.find_by_id(id).await)
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let user = self.repo.create(input).await;
        tracing::info!(user_id = user.id, name = %user.name, "Created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UpdateUser) -> AppResult<User> {
        if patch.is_empty() {
            tracing::debug!(user_id = id, "Empty patch, nothing to change");
        }
        let user = self.repo.update(id, patch).await.map_err(|e| {
            tracing::debug!(user_id = id, "Update rejected: {}", e);
            e
        })?;
        tracing::info!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if self.repo.delete(id).await {
            tracing::info!(user_id = id, "Deleted user");
        } else {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }
}
