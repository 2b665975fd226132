//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::service::UserService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: GatewayConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }

    /// State over a fresh store, seeded according to `config`.
    pub fn from_config(config: GatewayConfig) -> Self {
        let user_service = user_service_lib::build_user_service(config.seed_users);
        Self::new(user_service, config)
    }
}
