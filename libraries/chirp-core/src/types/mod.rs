//! Domain types for Chirp

mod ids;
mod tweet;
mod user;

pub use ids::{TweetId, UserId};
pub use tweet::Tweet;
pub use user::{Signup, User};
