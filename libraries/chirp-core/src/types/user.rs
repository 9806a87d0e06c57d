/// User domain types
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserId;

/// User account as persisted and returned to clients.
///
/// This is the post-validation shape: the identifier is a typed UUID and the
/// birth date a typed calendar date. The password is checked at signup and
/// never carried past validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Email address
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Optional birth date (ISO 8601 in serialized form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

/// Raw signup payload, exactly as received on the wire.
///
/// All fields are unvalidated strings; `validation::validate_signup` turns
/// this into a [`User`].
#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    /// Candidate user identifier (UUID string)
    pub id: String,

    /// Candidate email address
    pub email: String,

    /// Plaintext password, length-checked against the configured policy
    pub password: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Optional birth date, ISO 8601 (`YYYY-MM-DD`)
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_scalar_fields_as_text() {
        let user = User {
            id: UserId::parse("11111111-1111-1111-1111-111111111111").unwrap(),
            email: "a@b.com".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            birth_date: Some(NaiveDate::from_ymd_opt(1990, 1, 2).unwrap()),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(value["birth_date"], "1990-01-02");
    }

    #[test]
    fn user_omits_absent_birth_date() {
        let user = User {
            id: UserId::generate(),
            email: "a@b.com".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            birth_date: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("birth_date").is_none());
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User {
            id: UserId::generate(),
            email: "jo.doe@example.org".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            birth_date: Some(NaiveDate::from_ymd_opt(1985, 12, 31).unwrap()),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
