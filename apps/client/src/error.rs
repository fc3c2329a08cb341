//! # View errors
//!
//! | Variant | Raised when | Request sent? |
//! |---|---|---|
//! | `Validation` | input or transition rejected locally | no |
//! | `AccessDenied` | the gate refused the route | no |
//! | `Forbidden` | the user may not act on this entity | no |
//! | `Api` | the remote API failed | yes |
//! | `Session` | the session file could not be read or written | no |

use newsroom_domain::{DomainError, authz::Route};
use newsroom_infra::InfraError;
use newsroom_shared::event_log::error;
use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Gate denial; the caller should navigate to `redirect`
    #[error("access denied, redirecting to {redirect}")]
    AccessDenied {
        redirect: Route,
        notice:   Option<&'static str>,
    },

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("session storage error: {0}")]
    Session(InfraError),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => AppError::Validation(message),
            DomainError::Forbidden(message) => AppError::Forbidden(message),
            other @ DomainError::NotFound { .. } => AppError::Validation(other.to_string()),
        }
    }
}

impl From<InfraError> for AppError {
    fn from(err: InfraError) -> Self {
        match err.as_invalid_input() {
            Some(message) => AppError::Validation(message.to_string()),
            None => AppError::Session(err),
        }
    }
}

impl AppError {
    /// Logs remote and storage failures; local rejections are not errors
    pub fn log(&self, context: &str) {
        match self {
            AppError::Api(e) => tracing::error!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::SERVICE_COMMUNICATION,
                "{} failed: {}",
                context,
                e
            ),
            AppError::Session(e) => tracing::error!(
                error.category = error::category::INFRASTRUCTURE,
                error.kind = error::kind::SESSION,
                "{} failed: {:?}",
                context,
                e
            ),
            AppError::Validation(_) | AppError::AccessDenied { .. } | AppError::Forbidden(_) => {}
        }
    }
}
