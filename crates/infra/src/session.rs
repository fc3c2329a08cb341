//! # Session holder
//!
//! Keeps the logged-in user and role for the lifetime of the client and
//! across restarts.
//!
//! | Key | Value | Written by |
//! |-----|-------|------------|
//! | `user` | username | [`SessionManager::set_user`] |
//! | `role` | `redacteur` / `gebruiker` | [`SessionManager::set_role`] |
//!
//! Reads go to the in-memory cache first and fall back to the
//! [`SessionStorage`]; writes update both. A stored value that no longer
//! parses, or a storage read that fails, counts as "not logged in".

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use newsroom_domain::{role::Role, session::Session, user::Username};
use newsroom_shared::event_log::error;

use crate::{
    InfraError,
    storage::{SessionKey, SessionStorage},
};

#[derive(Debug, Default)]
struct Cache {
    user: Option<Username>,
    role: Option<Role>,
}

/// Holder of the current session
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
    cache:   Mutex<Cache>,
}

impl SessionManager {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            cache: Mutex::new(Cache::default()),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Cache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores the username
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: blank name
    /// - `Io` / `Serialization`: the storage could not be written
    #[tracing::instrument(skip_all, level = "debug")]
    pub fn set_user(&self, name: &str) -> Result<Username, InfraError> {
        let user = Username::new(name)?;
        self.storage.set(SessionKey::User, user.as_str())?;
        self.cache().user = Some(user.clone());
        Ok(user)
    }

    /// Stores the role
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: not one of the known role names
    /// - `Io` / `Serialization`: the storage could not be written
    #[tracing::instrument(skip_all, level = "debug", fields(role = %role))]
    pub fn set_role(&self, role: &str) -> Result<Role, InfraError> {
        let role: Role = role.parse()?;
        self.storage.set(SessionKey::Role, role.as_str())?;
        self.cache().role = Some(role);
        Ok(role)
    }

    pub fn get_user(&self) -> Option<Username> {
        if let Some(user) = self.cache().user.clone() {
            return Some(user);
        }
        let user = self.load(SessionKey::User, |raw| Username::new(raw.to_string()));
        self.cache().user.clone_from(&user);
        user
    }

    pub fn get_role(&self) -> Option<Role> {
        if let Some(role) = self.cache().role {
            return Some(role);
        }
        let role = self.load(SessionKey::Role, str::parse::<Role>);
        self.cache().role = role;
        role
    }

    /// Username and role, when both are present
    pub fn current(&self) -> Option<Session> {
        let user = self.get_user()?;
        let role = self.get_role()?;
        Some(Session::new(user, role))
    }

    /// Clears the cache and the stored copy
    ///
    /// # Errors
    ///
    /// `Io` / `Serialization` when the storage could not be cleared; the
    /// in-memory copy is cleared regardless.
    #[tracing::instrument(skip_all, level = "debug")]
    pub fn logout(&self) -> Result<(), InfraError> {
        *self.cache() = Cache::default();
        self.storage.clear()
    }

    fn load<T, E: fmt::Display>(
        &self,
        key: SessionKey,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::SESSION,
                    key = key.as_str(),
                    "session storage read failed, treating as logged out: {}",
                    e
                );
                return None;
            }
        };
        match parse(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::SESSION,
                    key = key.as_str(),
                    stored = %raw,
                    "ignoring stored session value: {}",
                    e
                );
                None
            }
        }
    }
}
