//! # Newsroom Infrastructure
//!
//! Local, durable state of the client: the session holder and the storage
//! it writes to.
//!
//! ## Dependencies
//!
//! ```text
//! client → infra → domain
//!            ↘
//!             shared
//! ```
//!
//! ## Modules
//!
//! - [`error`]: infrastructure errors with captured span traces
//! - [`session`]: [`SessionManager`], the cache + storage session holder
//! - [`storage`]: [`SessionStorage`] and its JSON file implementation
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use newsroom_infra::{FileSessionStorage, SessionManager};
//!
//! # fn main() -> Result<(), newsroom_infra::InfraError> {
//! let sessions = SessionManager::new(Arc::new(FileSessionStorage::new("session.json")));
//! sessions.set_user("alice")?;
//! sessions.set_role("redacteur")?;
//! assert!(sessions.current().is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod session;
pub mod storage;

pub use error::{InfraError, InfraErrorKind};
pub use session::SessionManager;
pub use storage::{FileSessionStorage, SessionKey, SessionStorage};
