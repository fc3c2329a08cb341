//! # Business event log and error context fields
//!
//! Naming conventions and a helper macro for structured log fields, so that
//! JSON logs can be filtered with `jq`.
//!
//! ## Business events
//!
//! Emitted with [`log_business_event!`]. The macro adds an
//! `event.kind = "business_event"` marker, so
//! `jq 'select(.["event.kind"] == "business_event")'` finds them.
//!
//! ## Error context
//!
//! `tracing::error!` / `tracing::warn!` calls carry `error.category` and
//! `error.kind` fields; the constants live in [`error`].
//!
//! ## Field naming
//!
//! Dotted names (`event.category`, `error.kind`) are supported by tracing's
//! `$($field:ident).+` pattern and come out as flat keys in JSON output.

/// Emits a business event as a structured `info` log line.
///
/// ## Expected fields (by convention)
///
/// - `event.category`: one of [`event::category`]
/// - `event.action`: one of [`event::action`]
/// - `event.result`: one of [`event::result`]
///
/// ## Recommended fields
///
/// - `event.entity_type`: one of [`event::entity_type`]
/// - `event.entity_id`: entity id
/// - `event.actor`: acting username
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// Event field constants
pub mod event {
    pub mod category {
        pub const POST: &str = "post";
        pub const REVIEW: &str = "review";
        pub const COMMENT: &str = "comment";
        pub const AUTH: &str = "auth";
    }

    pub mod action {
        // Posts
        pub const POST_CREATED: &str = "post.created";
        pub const POST_UPDATED: &str = "post.updated";
        pub const POST_SUBMITTED: &str = "post.submitted";

        // Reviews
        pub const REVIEW_ACCEPTED: &str = "review.accepted";
        pub const REVIEW_REJECTED: &str = "review.rejected";

        // Comments
        pub const COMMENT_CREATED: &str = "comment.created";
        pub const COMMENT_UPDATED: &str = "comment.updated";
        pub const COMMENT_DELETED: &str = "comment.deleted";

        // Auth
        pub const LOGIN: &str = "auth.login";
        pub const LOGOUT: &str = "auth.logout";
        pub const ACCESS_DENIED: &str = "auth.access_denied";
    }

    pub mod entity_type {
        pub const POST: &str = "post";
        pub const REVIEW: &str = "review";
        pub const COMMENT: &str = "comment";
        pub const SESSION: &str = "session";
    }

    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// Error context field constants
pub mod error {
    pub mod category {
        /// Local infrastructure (session storage)
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// Remote API calls
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    pub mod kind {
        pub const SESSION: &str = "session";
        pub const SERVICE_COMMUNICATION: &str = "service_communication";
    }
}
