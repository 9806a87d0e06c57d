//! Chirp Core
//!
//! Platform-agnostic domain types, validation, and storage traits for Chirp.
//!
//! This crate provides the foundational building blocks shared by the server
//! application and any future storage backends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Tweet`, and their typed identifiers
//! - **Validation**: field-level signup validation with a configurable
//!   password policy
//! - **Storage Port**: the [`UserStore`] trait that persistence backends
//!   implement
//! - **Error Handling**: unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use chirp_core::types::Signup;
//! use chirp_core::validation::{validate_signup, PasswordPolicy};
//!
//! let signup = Signup {
//!     id: "11111111-1111-1111-1111-111111111111".to_string(),
//!     email: "a@b.com".to_string(),
//!     password: "password1".to_string(),
//!     first_name: "Jo".to_string(),
//!     last_name: "Doe".to_string(),
//!     birth_date: None,
//! };
//!
//! let user = validate_signup(&signup, &PasswordPolicy::default()).unwrap();
//! assert_eq!(user.email, "a@b.com");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use store::UserStore;
pub use types::{Signup, Tweet, TweetId, User, UserId};
pub use validation::PasswordPolicy;
