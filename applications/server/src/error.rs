/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chirp_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Configuration error" }),
                )
            }
            ServerError::Core(err) => core_error_response(err),
        };

        (status, Json(body)).into_response()
    }
}

/// Map a core error to a response.
///
/// Client-input failures carry field-level detail; storage failures are
/// logged with their detail and surfaced as opaque server errors so internal
/// paths never reach the client.
fn core_error_response(err: CoreError) -> (StatusCode, serde_json::Value) {
    match err {
        CoreError::Validation {
            ref field,
            ref message,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": format!("invalid {field}: {message}"), "field": field }),
        ),
        CoreError::Duplicate(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, json!({ "error": err.to_string() })),
        CoreError::StoreCorrupt(ref detail) => {
            tracing::error!("Store corrupt: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Storage error" }),
            )
        }
        CoreError::StoreWrite(ref detail) => {
            tracing::error!("Store write failed: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Storage error" }),
            )
        }
        CoreError::Io(ref e) => {
            tracing::error!("IO error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            )
        }
        CoreError::Serialization(ref e) => {
            tracing::error!("Serialization error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            )
        }
    }
}
