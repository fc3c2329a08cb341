//! # Post lifecycle
//!
//! Status values and the transition table of the authoring / review workflow.
//!
//! | From | Action | To |
//! |---|---|---|
//! | (none) | save | DRAFT |
//! | (none) | submit | SUBMITTED |
//! | DRAFT / REJECTED | save | DRAFT |
//! | DRAFT / REJECTED | submit | SUBMITTED |
//! | SUBMITTED | accept | PUBLISHED |
//! | SUBMITTED | reject | REJECTED |
//!
//! Every other pair is rejected with [`DomainError::Validation`].

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{DomainError, review::ReviewStatus};

/// Post status
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
pub enum PostStatus {
    Draft,
    /// Waiting for review
    Submitted,
    /// Accepted by a reviewer; visible in the public list
    Published,
    /// Sent back by a reviewer with a reason
    Rejected,
}

impl PostStatus {
    /// Wire value used in paths and query strings
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether the author may still edit the post
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::Rejected)
    }

    /// Whether the post shows up in the review queue
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Status reached by an author action on an existing post
    ///
    /// Only DRAFT and REJECTED posts can be edited.
    pub fn after_edit(self, action: EditAction) -> Result<Self, DomainError> {
        if !self.is_editable() {
            return Err(DomainError::Validation(format!(
                "only DRAFT or REJECTED posts can be edited (current: {})",
                self
            )));
        }
        Ok(action.target_status())
    }

    /// Status reached by a review decision
    ///
    /// Only SUBMITTED posts can be reviewed.
    pub fn after_review(self, decision: ReviewStatus) -> Result<Self, DomainError> {
        if !self.is_reviewable() {
            return Err(DomainError::Validation(format!(
                "only SUBMITTED posts can be reviewed (current: {})",
                self
            )));
        }
        Ok(match decision {
            ReviewStatus::Accepted => Self::Published,
            ReviewStatus::Rejected => Self::Rejected,
        })
    }
}

impl std::str::FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "PUBLISHED" => Ok(Self::Published),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::Validation(format!(
                "unknown post status: {:?}",
                s
            ))),
        }
    }
}

/// Author action in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// "Save as draft"
    SaveDraft,
    /// "Submit for review"
    Submit,
}

impl EditAction {
    /// Status the post ends up in after the action
    ///
    /// Also the initial status when the action creates the post.
    pub fn target_status(self) -> PostStatus {
        match self {
            Self::SaveDraft => PostStatus::Draft,
            Self::Submit => PostStatus::Submitted,
        }
    }
}
