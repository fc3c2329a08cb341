//! # Reviews
//!
//! A reviewer's decision on a SUBMITTED post. Accepting publishes the post;
//! rejecting sends it back to its author together with a reason.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    DomainError,
    post::{Post, PostId},
    user::Username,
};

/// Review decision
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Accepted,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::Validation(format!(
                "unknown review status: {:?}",
                s
            ))),
        }
    }
}

/// Stored review, as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    post_id:     PostId,
    reason:      String,
    post_author: Username,
    author:      Username,
    status:      ReviewStatus,
}

impl Review {
    pub fn new(
        post_id: PostId,
        reason: impl Into<String>,
        post_author: Username,
        author: Username,
        status: ReviewStatus,
    ) -> Self {
        Self {
            post_id,
            reason: reason.into(),
            post_author,
            author,
            status,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn post_author(&self) -> &Username {
        &self.post_author
    }

    /// The reviewer
    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }
}

/// A validated review decision, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    post_id:     PostId,
    reason:      String,
    post_author: Username,
    reviewer:    Username,
    decision:    ReviewStatus,
}

impl NewReview {
    /// Validates a decision on `post`
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation`: the post is not SUBMITTED, or a rejection
    ///   has a blank reason
    /// - `DomainError::Forbidden`: the reviewer wrote the post
    pub fn new(
        post: &Post,
        reviewer: Username,
        decision: ReviewStatus,
        reason: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let reason = reason.into();
        if post.author() == &reviewer {
            return Err(DomainError::Forbidden(
                "authors cannot review their own posts".to_string(),
            ));
        }
        if !post.status().is_reviewable() {
            return Err(DomainError::Validation(format!(
                "post {} is {} and cannot be reviewed",
                post.id(),
                post.status()
            )));
        }
        if decision == ReviewStatus::Rejected && reason.trim().is_empty() {
            return Err(DomainError::Validation(
                "a reason is required when rejecting".to_string(),
            ));
        }
        Ok(Self {
            post_id: post.id(),
            reason,
            post_author: post.author().clone(),
            reviewer,
            decision,
        })
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn post_author(&self) -> &Username {
        &self.post_author
    }

    pub fn reviewer(&self) -> &Username {
        &self.reviewer
    }

    pub fn decision(&self) -> ReviewStatus {
        self.decision
    }
}
