//! # Posts
//!
//! Short news articles and their authoring / review lifecycle.
//!
//! ## Concepts
//!
//! - **Post**: an article owned by its author, identified by a remote-assigned id
//! - **PostStatus**: DRAFT / SUBMITTED / PUBLISHED / REJECTED (see [`lifecycle`])
//! - **PostFilter**: query for the post listing
//!
//! Transitions consume the post and return the new value, so a rejected
//! transition leaves the caller without a half-updated post.
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use newsroom_domain::{
//!     post::{EditAction, NewPost, PostContent, PostStatus},
//!     user::Username,
//! };
//!
//! let post = NewPost::new(
//!     Username::new("alice")?,
//!     PostContent::new("Budget vote", "The council voted...")?,
//!     EditAction::Submit,
//! );
//! assert_eq!(post.status(), PostStatus::Submitted);
//! # Ok(())
//! # }
//! ```

mod filter;
mod lifecycle;

use chrono::NaiveDateTime;
pub use filter::*;
pub use lifecycle::*;

use crate::{DomainError, review::ReviewStatus, user::Username};

define_numeric_id! {
    /// Post id (assigned by the remote store)
    pub struct PostId;
}

/// Title and body of a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    title:   String,
    content: String,
}

impl PostContent {
    /// # Errors
    ///
    /// - blank title
    /// - blank content
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A post that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    author:  Username,
    content: PostContent,
    status:  PostStatus,
}

impl NewPost {
    /// Prepares a post; the action picks the initial status
    pub fn new(author: Username, content: PostContent, action: EditAction) -> Self {
        Self {
            author,
            content,
            status: action.target_status(),
        }
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn title(&self) -> &str {
        self.content.title()
    }

    pub fn content(&self) -> &str {
        self.content.content()
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id:            PostId,
    title:         String,
    content:       String,
    author:        Username,
    status:        PostStatus,
    creation_date: NaiveDateTime,
}

/// Flat representation used to rebuild a [`Post`] from a remote payload
pub struct PostRecord {
    pub id:            PostId,
    pub title:         String,
    pub content:       String,
    pub author:        Username,
    pub status:        PostStatus,
    pub creation_date: NaiveDateTime,
}

impl Post {
    pub fn from_record(record: PostRecord) -> Self {
        Self {
            id:            record.id,
            title:         record.title,
            content:       record.content,
            author:        record.author,
            status:        record.status,
            creation_date: record.creation_date,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    /// Whether the review reason belongs on the editor screen
    ///
    /// Only a REJECTED post carries a reason worth showing its author.
    pub fn shows_review_reason(&self) -> bool {
        self.status == PostStatus::Rejected
    }

    /// Checks that `editor` may open this post in the editor
    ///
    /// # Errors
    ///
    /// - `DomainError::Forbidden`: `editor` is not the author
    /// - `DomainError::Validation`: status is neither DRAFT nor REJECTED
    pub fn check_editable_by(&self, editor: &Username) -> Result<(), DomainError> {
        if &self.author != editor {
            return Err(DomainError::Forbidden(format!(
                "post {} belongs to {}",
                self.id, self.author
            )));
        }
        if !self.status.is_editable() {
            return Err(DomainError::Validation(format!(
                "post {} cannot be edited while {}",
                self.id, self.status
            )));
        }
        Ok(())
    }

    /// Applies an editor action and returns the updated post
    ///
    /// # Errors
    ///
    /// See [`Post::check_editable_by`].
    pub fn edited(
        self,
        editor: &Username,
        content: PostContent,
        action: EditAction,
    ) -> Result<Self, DomainError> {
        self.check_editable_by(editor)?;
        let status = self.status.after_edit(action)?;
        Ok(Self {
            title: content.title,
            content: content.content,
            status,
            ..self
        })
    }

    /// Applies a review decision and returns the updated post
    ///
    /// # Errors
    ///
    /// - `DomainError::Forbidden`: the reviewer wrote the post
    /// - `DomainError::Validation`: status is not SUBMITTED
    pub fn reviewed(self, reviewer: &Username, decision: ReviewStatus) -> Result<Self, DomainError> {
        if &self.author == reviewer {
            return Err(DomainError::Forbidden(
                "authors cannot review their own posts".to_string(),
            ));
        }
        let status = self.status.after_review(decision)?;
        Ok(Self { status, ..self })
    }
}
