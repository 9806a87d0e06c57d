/// Tweet domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TweetId, User};

/// A tweet authored by a user.
///
/// The author is embedded rather than referenced, mirroring the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique tweet identifier
    pub id: TweetId,

    /// Tweet body, 1-256 characters
    pub content: String,

    /// Creation timestamp, assigned when the tweet is constructed
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last edit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Authoring user
    pub by: User,
}

impl Tweet {
    /// Construct a tweet, stamping `created_at` at call time.
    ///
    /// The timestamp is taken per construction, never from a shared default.
    pub fn new(id: TweetId, content: impl Into<String>, by: User) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
            by,
        }
    }
}
