//! # Domain errors
//!
//! Business rule violations raised by the domain model.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Validation` | Input or state transition rejected before any request is sent |
//! | `NotFound` | Referenced entity does not exist |
//! | `Forbidden` | The acting user may not perform the operation |
//!
//! ```rust
//! use newsroom_domain::DomainError;
//!
//! fn validate_title(title: &str) -> Result<(), DomainError> {
//!     if title.trim().is_empty() {
//!         return Err(DomainError::Validation("title is required".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_title("").is_err());
//! ```

use thiserror::Error;

/// Errors raised by the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or transition violates a business rule
    ///
    /// - missing required field
    /// - unknown enum value (role, status)
    /// - transition that is not an edge of the post lifecycle
    #[error("validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity kind ("Post", "Review", ...)
        entity_type: &'static str,
        id:          String,
    },

    /// The acting user lacks the right to perform the operation
    ///
    /// Authorization, not authentication: the user is known but not allowed.
    #[error("forbidden: {0}")]
    Forbidden(String),
}
