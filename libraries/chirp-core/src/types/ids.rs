/// ID types for Chirp entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::CoreError;

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a user ID from an existing UUID
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random user ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from its textual form
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::validation("id", "must be a valid UUID"))
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tweet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweetId(Uuid);

impl TweetId {
    /// Create a tweet ID from an existing UUID
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random tweet ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a tweet ID from its textual form
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::validation("tweet_id", "must be a valid UUID"))
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_generation_creates_unique_ids() {
        let id1 = UserId::generate();
        let id2 = UserId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn user_id_parse_round_trips() {
        let id = UserId::parse("11111111-1111-1111-1111-111111111111").unwrap();
        assert_eq!(id.to_string(), "11111111-1111-1111-1111-111111111111");
    }

    #[test]
    fn user_id_rejects_garbage() {
        assert!(UserId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn tweet_id_display() {
        let id = TweetId::parse("22222222-2222-2222-2222-222222222222").unwrap();
        assert_eq!(format!("{}", id), "22222222-2222-2222-2222-222222222222");
    }
}
