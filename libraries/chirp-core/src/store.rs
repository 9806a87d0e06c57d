//! Storage port for user records
//!
//! Route handlers depend on this trait rather than a concrete backend, so
//! the flat-file store can be swapped for an embedded or networked datastore
//! without touching route logic.

use crate::error::Result;
use crate::types::{User, UserId};
use async_trait::async_trait;

/// Persistence capabilities for the user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Durably append one validated record to the collection.
    ///
    /// The append is all-or-nothing: on any failure the collection is left
    /// exactly as it was. Returns the appended record as confirmation.
    async fn append(&self, user: User) -> Result<User>;

    /// Read the full collection.
    async fn list(&self) -> Result<Vec<User>>;

    /// Look up a single record by ID.
    async fn get(&self, id: UserId) -> Result<Option<User>>;

    /// Replace the record with the same ID.
    async fn update(&self, user: User) -> Result<User>;

    /// Remove the record with the given ID.
    async fn delete(&self, id: UserId) -> Result<()>;
}
