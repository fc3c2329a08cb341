//! # Comments
//!
//! Comments hang off a post but have their own lifecycle: any logged-in user
//! may comment on a post they can see, and only the comment's author may
//! change or remove it afterwards.

use crate::{DomainError, post::PostId, user::Username};

define_numeric_id! {
    /// Comment id (assigned by the remote store)
    pub struct CommentId;
}

/// Comment text, non-blank after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "comment text is required".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id:      CommentId,
    post_id: PostId,
    content: String,
    author:  Username,
}

impl Comment {
    pub fn new(id: CommentId, post_id: PostId, content: impl Into<String>, author: Username) -> Self {
        Self {
            id,
            post_id,
            content: content.into(),
            author,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    /// # Errors
    ///
    /// `DomainError::Forbidden` when `user` did not write the comment.
    pub fn check_owned_by(&self, user: &Username) -> Result<(), DomainError> {
        if &self.author != user {
            return Err(DomainError::Forbidden(format!(
                "comment {} belongs to {}",
                self.id, self.author
            )));
        }
        Ok(())
    }

    /// Replaces the text; only the author may do so
    pub fn edited(self, editor: &Username, body: CommentBody) -> Result<Self, DomainError> {
        self.check_owned_by(editor)?;
        Ok(Self {
            content: body.0,
            ..self
        })
    }
}
