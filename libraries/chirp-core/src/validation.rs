//! Signup payload validation.
//!
//! Every rule is checked before anything touches storage; a payload is either
//! accepted whole (and normalized into typed values) or rejected with an
//! error naming the offending field. Lengths are counted in characters, not
//! bytes.
//!
//! # Validation Rules
//!
//! - `id` must parse as a UUID
//! - `email` must match a valid email grammar
//! - `password` length must fall within the configured [`PasswordPolicy`]
//! - `first_name` / `last_name` length must fall within `[2, 50]`
//! - `birth_date`, if present, must parse as an ISO 8601 calendar date

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::error::{CoreError, Result};
use crate::types::{Signup, User, UserId};

/// Minimum allowed length for first and last names.
pub const NAME_MIN: usize = 2;

/// Maximum allowed length for first and last names.
pub const NAME_MAX: usize = 50;

/// Minimum allowed length for tweet content.
pub const TWEET_CONTENT_MIN: usize = 1;

/// Maximum allowed length for tweet content.
pub const TWEET_CONTENT_MAX: usize = 256;

/// Date format accepted for `birth_date`.
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Password length bounds.
///
/// The upper bound is optional: early revisions of the API capped passwords
/// at 64 characters, later ones dropped the cap, so it is policy rather than
/// a hard invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length in characters
    pub min: usize,
    /// Maximum password length in characters, if bounded
    pub max: Option<usize>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min: 8, max: None }
    }
}

/// Validates a signup payload and normalizes it into a [`User`].
///
/// The password is length-checked against `policy` and then discarded; it is
/// not part of the returned record.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first field that violates a
/// constraint.
pub fn validate_signup(signup: &Signup, policy: &PasswordPolicy) -> Result<User> {
    let id = UserId::parse(&signup.id)?;

    if !signup.email.validate_email() {
        return Err(CoreError::validation(
            "email",
            "must be a valid email address",
        ));
    }

    validate_password(&signup.password, policy)?;
    validate_name("first_name", &signup.first_name)?;
    validate_name("last_name", &signup.last_name)?;

    let birth_date = signup
        .birth_date
        .as_deref()
        .map(parse_birth_date)
        .transpose()?;

    Ok(User {
        id,
        email: signup.email.clone(),
        first_name: signup.first_name.clone(),
        last_name: signup.last_name.clone(),
        birth_date,
    })
}

/// Validates tweet content against the `[1, 256]` character bounds.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the content is empty or too long.
pub fn validate_tweet_content(content: &str) -> Result<()> {
    let length = content.chars().count();
    if length < TWEET_CONTENT_MIN {
        return Err(CoreError::validation("content", "must not be empty"));
    }
    if length > TWEET_CONTENT_MAX {
        return Err(CoreError::validation(
            "content",
            format!("must be at most {TWEET_CONTENT_MAX} characters"),
        ));
    }
    Ok(())
}

fn validate_password(password: &str, policy: &PasswordPolicy) -> Result<()> {
    let length = password.chars().count();
    if length < policy.min {
        return Err(CoreError::validation(
            "password",
            format!("must be at least {} characters", policy.min),
        ));
    }
    if let Some(max) = policy.max {
        if length > max {
            return Err(CoreError::validation(
                "password",
                format!("must be at most {max} characters"),
            ));
        }
    }
    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    let length = value.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return Err(CoreError::validation(
            field,
            format!("must be between {NAME_MIN} and {NAME_MAX} characters"),
        ));
    }
    Ok(())
}

fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
        .map_err(|_| CoreError::validation("birth_date", "must be an ISO 8601 date (YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> Signup {
        Signup {
            id: "11111111-1111-1111-1111-111111111111".to_string(),
            email: "a@b.com".to_string(),
            password: "password1".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            birth_date: None,
        }
    }

    fn field_of(err: CoreError) -> String {
        match err {
            CoreError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn accepts_a_minimal_valid_payload() {
        let user = validate_signup(&signup(), &PasswordPolicy::default()).unwrap();
        assert_eq!(
            user.id.to_string(),
            "11111111-1111-1111-1111-111111111111"
        );
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.first_name, "Jo");
        assert_eq!(user.last_name, "Doe");
        assert!(user.birth_date.is_none());
    }

    #[test]
    fn accepts_and_normalizes_birth_date() {
        let mut payload = signup();
        payload.birth_date = Some("1990-01-02".to_string());

        let user = validate_signup(&payload, &PasswordPolicy::default()).unwrap();
        assert_eq!(
            user.birth_date,
            Some(NaiveDate::from_ymd_opt(1990, 1, 2).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_id() {
        let mut payload = signup();
        payload.id = "not-a-uuid".to_string();

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "id");
    }

    #[test]
    fn rejects_malformed_email() {
        let mut payload = signup();
        payload.email = "not-an-email".to_string();

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "email");
    }

    #[test]
    fn rejects_short_password() {
        let mut payload = signup();
        payload.password = "short".to_string();

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "password");
    }

    #[test]
    fn accepts_password_at_exact_minimum() {
        let mut payload = signup();
        payload.password = "a".repeat(8);

        assert!(validate_signup(&payload, &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn bounded_policy_rejects_long_password() {
        let policy = PasswordPolicy {
            min: 8,
            max: Some(64),
        };
        let mut payload = signup();
        payload.password = "a".repeat(65);

        let err = validate_signup(&payload, &policy).unwrap_err();
        assert_eq!(field_of(err), "password");
    }

    #[test]
    fn unbounded_policy_accepts_long_password() {
        let mut payload = signup();
        payload.password = "a".repeat(200);

        assert!(validate_signup(&payload, &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn rejects_single_character_name() {
        let mut payload = signup();
        payload.first_name = "J".to_string();

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "first_name");
    }

    #[test]
    fn rejects_name_exceeding_max_length() {
        let mut payload = signup();
        payload.last_name = "D".repeat(NAME_MAX + 1);

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "last_name");
    }

    #[test]
    fn accepts_name_at_exact_bounds() {
        let mut payload = signup();
        payload.first_name = "A".repeat(NAME_MIN);
        payload.last_name = "B".repeat(NAME_MAX);

        assert!(validate_signup(&payload, &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn rejects_malformed_birth_date() {
        let mut payload = signup();
        payload.birth_date = Some("02/01/1990".to_string());

        let err = validate_signup(&payload, &PasswordPolicy::default()).unwrap_err();
        assert_eq!(field_of(err), "birth_date");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut payload = signup();
        // Two characters, four bytes
        payload.first_name = "åö".to_string();

        assert!(validate_signup(&payload, &PasswordPolicy::default()).is_ok());
    }

    #[test]
    fn tweet_content_bounds() {
        assert!(validate_tweet_content("x").is_ok());
        assert!(validate_tweet_content(&"x".repeat(TWEET_CONTENT_MAX)).is_ok());
        assert!(validate_tweet_content("").is_err());
        assert!(validate_tweet_content(&"x".repeat(TWEET_CONTENT_MAX + 1)).is_err());
    }
}
