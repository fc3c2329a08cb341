//! # Usernames
//!
//! Users are identified by a free-form name chosen at login. There is no
//! account registry on the client side; the name is what posts, comments and
//! reviews record as their author.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Minimum username length accepted by the login form
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Username (value object)
///
/// Non-blank after trimming. Remote payloads are accepted as long as they are
/// non-blank; the login form applies the stricter [`Username::for_login`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("username is required".to_string()));
        }
        Ok(Self(value))
    }

    /// Validates a username typed into the login form
    pub fn for_login(value: impl Into<String>) -> Result<Self, DomainError> {
        let username = Self::new(value)?;
        if username.0.chars().count() < USERNAME_MIN_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at least {} characters",
                USERNAME_MIN_LENGTH
            )));
        }
        Ok(username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("alice", "alice")]
    #[case("  bob  ", "bob")]
    #[case("x", "x")]
    fn test_new_trims_and_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Username::new(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_new_rejects_blank(#[case] input: &str) {
        assert!(Username::new(input).is_err());
    }

    #[rstest]
    #[case("ab", false)]
    #[case(" ab ", false)]
    #[case("abc", true)]
    #[case("émi", true)]
    fn test_for_login_requires_three_characters(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(Username::for_login(input).is_ok(), ok);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Username>(r#""  ""#).is_err());
        assert_eq!(
            serde_json::from_str::<Username>(r#""carol""#).unwrap(),
            Username::new("carol").unwrap()
        );
    }
}
