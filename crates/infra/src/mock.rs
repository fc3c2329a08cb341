//! # In-memory session storage
//!
//! For tests in this crate and, through the `test-utils` feature, in others:
//!
//! ```toml
//! [dev-dependencies]
//! newsroom-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{
    InfraError,
    storage::{SessionKey, SessionStorage},
};

#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    entries: Mutex<HashMap<SessionKey, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with a user and a raw role value
    pub fn with_session(user: &str, role: &str) -> Self {
        let storage = Self::new();
        storage.entries().insert(SessionKey::User, user.to_string());
        storage.entries().insert(SessionKey::Role, role.to_string());
        storage
    }

    /// Raw stored value, bypassing any cache
    pub fn value(&self, key: SessionKey) -> Option<String> {
        self.entries().get(&key).cloned()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<SessionKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: SessionKey) -> Result<Option<String>, InfraError> {
        Ok(self.value(key))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), InfraError> {
        self.entries().insert(key, value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), InfraError> {
        self.entries().clear();
        Ok(())
    }
}
