/// Tweet API routes
///
/// The whole tweet surface is declared without behavior: no create, read,
/// update, or delete path stores or retrieves a tweet.
use crate::api::not_implemented;
use axum::{extract::Path, http::StatusCode, Json};

/// GET /tweets
pub async fn list_tweets() -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("list tweets")
}

/// POST /tweets/post
pub async fn post_tweet() -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("post tweet")
}

/// GET /tweets/:tweet_id
pub async fn get_tweet(Path(_tweet_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("show tweet")
}

/// DELETE /tweets/:tweet_id/delete
pub async fn delete_tweet(Path(_tweet_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("delete tweet")
}

/// PUT /tweets/:tweet_id/update
pub async fn update_tweet(Path(_tweet_id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    not_implemented("update tweet")
}
