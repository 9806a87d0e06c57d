/// Common test utilities and fixtures
use axum::Router;
use chirp_core::PasswordPolicy;
use chirp_server::{api, state::AppState};
use chirp_storage::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Build a router over a fresh file-backed store in a temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn create_test_app() -> (Router, TempDir) {
    create_test_app_with_policy(PasswordPolicy::default())
}

pub fn create_test_app_with_policy(policy: PasswordPolicy) -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(users_file(&temp_dir)));
    let app_state = AppState::new(store, policy);
    (api::router(app_state), temp_dir)
}

/// Path of the backing collection file inside the test directory.
pub fn users_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("users.json")
}

/// Signup payloads used across tests
pub mod fixtures {
    pub fn valid_signup() -> serde_json::Value {
        serde_json::json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "email": "a@b.com",
            "password": "password1",
            "first_name": "Jo",
            "last_name": "Doe"
        })
    }
}
