/// API route modules
pub mod health;
pub mod tweets;
pub mod users;

use crate::state::AppState;
use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// `POST /signup` and `GET /users` are the implemented surface; the rest of
/// the user/tweet CRUD inventory is declared but answers 501.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health))
        // Users
        .route("/signup", post(users::signup))
        .route("/login", post(users::login))
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/delete", delete(users::delete_user))
        .route("/users/:user_id/update", put(users::update_user))
        // Tweets
        .route("/tweets", get(tweets::list_tweets))
        .route("/tweets/post", post(tweets::post_tweet))
        .route("/tweets/:tweet_id", get(tweets::get_tweet))
        .route("/tweets/:tweet_id/delete", delete(tweets::delete_tweet))
        .route("/tweets/:tweet_id/update", put(tweets::update_tweet))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / - greeting
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

/// Response for a declared route with no defined behavior.
pub(crate) fn not_implemented(operation: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(serde_json::json!({
            "error": format!("{operation} is not implemented")
        })),
    )
}
