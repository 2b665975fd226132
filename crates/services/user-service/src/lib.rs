//! User Service Library
//!
//! This crate owns the in-memory user store and the use cases built on it.
//! The HTTP gateway embeds one long-lived instance per process.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Build the user service over a fresh store.
///
/// With `seed` set the store starts with the three demo users.
pub fn build_user_service(seed: bool) -> Arc<dyn UserService> {
    let store = if seed {
        InMemoryUserStore::new()
    } else {
        InMemoryUserStore::empty()
    };
    Arc::new(UserManager::new(Arc::new(store)))
}
