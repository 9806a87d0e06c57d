/// Shared application state
use chirp_core::{PasswordPolicy, UserStore};
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Handlers see the storage port, not a concrete backend, so the flat-file
/// store can be replaced without touching route logic.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub password_policy: PasswordPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, password_policy: PasswordPolicy) -> Self {
        Self {
            store,
            password_policy,
        }
    }
}
