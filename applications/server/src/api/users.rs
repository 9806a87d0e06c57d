/// User API routes
use crate::{api::not_implemented, error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chirp_core::{
    types::{Signup, User},
    validation::validate_signup,
};

/// POST /signup
/// Validate a registration payload and append it to the user collection.
///
/// Validation runs before any storage mutation; a rejected payload leaves
/// the collection untouched. The response is the persisted record, password
/// excluded.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<Signup>,
) -> Result<(StatusCode, Json<User>)> {
    let user = validate_signup(&payload, &state.password_policy)?;
    let user = state.store.append(user).await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
/// Return the full user collection.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

// The remaining declared routes have no defined behavior: they answer 501
// and touch no state.

/// POST /login
pub async fn login() -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("login")
}

/// GET /users/:user_id
pub async fn get_user(Path(_user_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("show user")
}

/// DELETE /users/:user_id/delete
pub async fn delete_user(Path(_user_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("delete user")
}

/// PUT /users/:user_id/update
pub async fn update_user(Path(_user_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("update user")
}
