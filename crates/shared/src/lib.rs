//! # Newsroom shared utilities
//!
//! Cross-cutting helpers used by every crate in the workspace.
//!
//! ## Design
//!
//! - Depended on by `domain`, `infra` and the client app
//! - Holds no business logic
//! - Keeps its own dependencies to `tracing` and (optionally) `tracing-subscriber`

pub mod event_log;
pub mod observability;
