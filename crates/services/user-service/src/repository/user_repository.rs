//! In-memory user repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use domain::{CreateUser, DomainError, DomainResult, UpdateUser, User, UserId};

use super::seed::seed_users;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Only `update` can fail; a missing id is reported as `None` by lookups and
/// ignored by `delete`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Create a new user with the next free id
    async fn create(&self, input: CreateUser) -> User;

    /// Overwrite the supplied fields of an existing user
    async fn update(&self, id: UserId, patch: UpdateUser) -> DomainResult<User>;

    /// Remove user by ID, returning whether a record was removed
    async fn delete(&self, id: UserId) -> bool;
}

/// Ordered in-memory user collection.
///
/// Mutations hold the write lock for their whole duration, so id assignment
/// and insertion are atomic with respect to each other.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    /// Create a store holding the seed users
    pub fn new() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store with no users
    pub fn empty() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a store over the given records; ids must already be unique
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Max existing id plus one; an empty collection starts at 1.
fn next_id(users: &[User]) -> UserId {
    users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    async fn create(&self, input: CreateUser) -> User {
        let mut users = self.users.write().await;

        let user = User::from_input(next_id(&users), input);
        users.push(user.clone());

        tracing::debug!(user_id = user.id, "Inserted user");
        user
    }

    async fn update(&self, id: UserId, patch: UpdateUser) -> DomainResult<User> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(DomainError::user_not_found)?;

        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> bool {
        let mut users = self.users.write().await;

        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserRole;

    fn alice() -> CreateUser {
        CreateUser {
            name: "Alice".to_string(),
            age: 22,
            role: UserRole::Student,
        }
    }

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|u| u.id).collect()
    }

    #[tokio::test]
    async fn test_new_store_is_seeded() {
        let store = InMemoryUserStore::new();
        let users = store.list().await;

        assert_eq!(users, seed_users());
        assert_eq!(ids(&users), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_on_empty_store_assigns_sequential_ids() {
        let store = InMemoryUserStore::empty();

        for expected in 1..=5 {
            let user = store.create(alice()).await;
            assert_eq!(user.id, expected);
        }

        assert_eq!(ids(&store.list().await), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_create_on_seeded_store() {
        let store = InMemoryUserStore::new();

        let user = store.create(alice()).await;

        assert_eq!(user, User::new(4, "Alice", 22, UserRole::Student));
        assert_eq!(store.list().await.len(), 4);
        assert_eq!(store.find_by_id(4).await, Some(user));
    }

    #[tokio::test]
    async fn test_create_uses_max_id_not_length() {
        let store = InMemoryUserStore::with_users(vec![
            User::new(7, "Ann", 40, UserRole::Teacher),
            User::new(2, "Bob", 19, UserRole::Student),
        ]);

        let user = store.create(alice()).await;
        assert_eq!(user.id, 8);
    }

    #[tokio::test]
    async fn test_create_after_deleting_max_id_reuses_it() {
        let store = InMemoryUserStore::new();
        store.delete(3).await;

        let user = store.create(alice()).await;
        assert_eq!(user.id, 3);
        assert_eq!(ids(&store.list().await), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let store = InMemoryUserStore::new();

        assert!(store.find_by_id(999).await.is_none());
        assert_eq!(store.find_by_id(2).await.unwrap().name, "John");
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let store = InMemoryUserStore::new();

        let user = store
            .update(
                1,
                UpdateUser {
                    age: Some(27),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user, User::new(1, "Tyler", 27, UserRole::Teacher));
        assert_eq!(store.find_by_id(1).await, Some(user));
    }

    #[tokio::test]
    async fn test_update_is_visible_through_list() {
        let store = InMemoryUserStore::new();

        store
            .update(
                2,
                UpdateUser {
                    name: Some("Johnny".to_string()),
                    role: Some(UserRole::Admin),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let users = store.list().await;
        assert_eq!(users[1], User::new(2, "Johnny", 33, UserRole::Admin));
    }

    #[tokio::test]
    async fn test_update_missing_id_fails_without_mutation() {
        let store = InMemoryUserStore::new();

        let result = store
            .update(
                999,
                UpdateUser {
                    age: Some(1),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(DomainError::user_not_found()));
        assert_eq!(store.list().await, seed_users());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = InMemoryUserStore::new();

        assert!(store.delete(2).await);
        assert_eq!(ids(&store.list().await), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let store = InMemoryUserStore::new();

        assert!(!store.delete(999).await);
        assert_eq!(store.list().await, seed_users());
    }

    #[tokio::test]
    async fn test_delete_twice_matches_once() {
        let store = InMemoryUserStore::new();

        store.delete(1).await;
        let after_once = store.list().await;
        store.delete(1).await;

        assert_eq!(store.list().await, after_once);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = InMemoryUserStore::empty();

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(alice()).await.id })
            })
            .collect();

        let mut assigned = Vec::new();
        for handle in handles {
            assigned.push(handle.await.unwrap());
        }
        assigned.sort_unstable();

        assert_eq!(assigned, (1..=20).collect::<Vec<_>>());
    }
}
