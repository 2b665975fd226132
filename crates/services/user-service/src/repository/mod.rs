//! Repository layer for data access.

mod seed;
mod user_repository;

pub use seed::seed_users;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::{InMemoryUserStore, UserRepository};
