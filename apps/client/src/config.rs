//! # Client configuration
//!
//! Read from environment variables (a `.env` file is loaded first by the
//! binary).
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `NEWSROOM_API_URL` | yes | |
//! | `NEWSROOM_SESSION_FILE` | no | [`DEFAULT_SESSION_FILE`] |
//!
//! `LOG_FORMAT` and `RUST_LOG` are read by the tracing setup.

use std::{env, path::PathBuf};

use thiserror::Error;

/// Session file used when `NEWSROOM_SESSION_FILE` is unset
pub const DEFAULT_SESSION_FILE: &str = ".newsroom-session.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the remote news API
    pub api_url:      String,
    /// JSON file holding the session between runs
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("NEWSROOM_API_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("NEWSROOM_API_URL"))?;
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name:   "NEWSROOM_API_URL",
                reason: format!("expected an http(s) URL, got {api_url:?}"),
            });
        }

        let session_file = lookup("NEWSROOM_SESSION_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        Ok(Self {
            api_url,
            session_file,
        })
    }
}
