//! Review notifications, produced remotely whenever a post is reviewed.

use crate::user::Username;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message:     String,
    /// The reviewer
    author:      Username,
    post_author: Username,
}

impl Notification {
    pub fn new(message: impl Into<String>, author: Username, post_author: Username) -> Self {
        Self {
            message: message.into(),
            author,
            post_author,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn post_author(&self) -> &Username {
        &self.post_author
    }
}
