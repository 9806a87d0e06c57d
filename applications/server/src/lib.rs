//! Chirp Server Library
//!
//! Social-media style HTTP API: user registration backed by a durable
//! flat-file append store, plus the declared-but-unimplemented remainder of
//! the user/tweet CRUD surface.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
