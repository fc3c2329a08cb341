//! # Infrastructure errors
//!
//! Failures of the local session storage.
//!
//! Follows the `std::io::Error` layout:
//! - [`InfraError`]: wraps an [`InfraErrorKind`] together with the
//!   [`SpanTrace`] captured where the error was created
//! - [`InfraErrorKind`]: what went wrong (I/O, JSON, rejected input)
//!
//! Every `From` impl and convenience constructor captures the span trace, so
//! a logged error shows which session operation it came from.

use std::fmt;

use derive_more::Display;
use newsroom_domain::DomainError;
use thiserror::Error;
use tracing_error::SpanTrace;

/// Error raised by the infrastructure layer
///
/// Match on [`kind()`](InfraError::kind):
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::InvalidInput(message) => { /* show to the user */ }
///     _ => { /* storage failure */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// Kind of infrastructure error
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// Reading, writing or renaming the session file failed
    #[error("session storage I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// The session file is not a JSON object of strings
    #[error("session storage serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A value handed to the session holder was rejected
    ///
    /// Unknown role names and blank usernames end up here.
    #[error("invalid session value: {0}")]
    InvalidInput(String),
}

impl InfraError {
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Message of an `InvalidInput` error
    pub fn as_invalid_input(&self) -> Option<&str> {
        match &self.kind {
            InfraErrorKind::InvalidInput(message) => Some(message),
            _ => None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidInput(message.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<std::io::Error> for InfraError {
    fn from(source: std::io::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Io(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Serialization(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<DomainError> for InfraError {
    fn from(source: DomainError) -> Self {
        let message = match source {
            DomainError::Validation(message) | DomainError::Forbidden(message) => message,
            other @ DomainError::NotFound { .. } => other.to_string(),
        };
        Self::invalid_input(message)
    }
}
