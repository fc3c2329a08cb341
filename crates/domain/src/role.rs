//! # Roles
//!
//! The closed set of roles a session can hold.
//!
//! | Role | Wire value | Rights |
//! |---|---|---|
//! | [`Role::Redacteur`] | `redacteur` | authoring, moderation, notifications, browsing, commenting |
//! | [`Role::Gebruiker`] | `gebruiker` | browsing and commenting only |
//!
//! Role values are parsed at every boundary (session storage, login input,
//! remote payloads); unknown strings are rejected instead of being carried
//! around as free text.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// Session role
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Editor / reviewer
    Redacteur,
    /// Reader
    Gebruiker,
}

impl Role {
    /// Wire value sent in the `Role` header
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "redacteur" => Ok(Self::Redacteur),
            "gebruiker" => Ok(Self::Gebruiker),
            _ => Err(DomainError::Validation(format!("unknown role: {:?}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case("redacteur", Role::Redacteur)]
    #[case("gebruiker", Role::Gebruiker)]
    fn test_parses_known_roles(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("admin")]
    #[case("Redacteur")]
    #[case(" redacteur")]
    fn test_rejects_unknown_roles(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Role>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_display_matches_wire_value() {
        for role in Role::iter() {
            assert_eq!(role.to_string(), role.as_str());
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Role::Redacteur).unwrap(),
            r#""redacteur""#
        );
        assert_eq!(
            serde_json::from_str::<Role>(r#""gebruiker""#).unwrap(),
            Role::Gebruiker
        );
    }
}
