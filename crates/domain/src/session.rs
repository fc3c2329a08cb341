//! # Session
//!
//! The identity + role pair of the logged-in user.
//!
//! A `Session` only exists when both halves are known, so holding one is
//! proof of being logged in. Partial state (a stored user without a role, or
//! the reverse) is the session holder's concern and surfaces as "no session".

use serde::{Deserialize, Serialize};

use crate::{role::Role, user::Username};

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: Username,
    role:     Role,
}

impl Session {
    pub fn new(username: Username, role: Role) -> Self {
        Self { username, role }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Whether `author` is the logged-in user
    pub fn is_author_of(&self, author: &Username) -> bool {
        &self.username == author
    }
}
