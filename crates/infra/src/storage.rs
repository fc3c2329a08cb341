//! # Session storage
//!
//! Durable key/value storage behind the session holder.
//!
//! ## File layout
//!
//! A single JSON object of strings:
//!
//! ```json
//! { "user": "alice", "role": "redacteur" }
//! ```
//!
//! A missing file reads as an empty store. Writes go to a sibling temp file
//! that is then renamed over the original, so readers never observe a
//! half-written file.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use newsroom_shared::event_log::error;

use crate::{InfraError, InfraErrorKind};

/// Keys stored by the session holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    User,
    Role,
}

impl SessionKey {
    pub const ALL: [Self; 2] = [Self::User, Self::Role];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Role => "role",
        }
    }
}

/// Durable key/value store for session values
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>, InfraError>;

    fn set(&self, key: SessionKey, value: &str) -> Result<(), InfraError>;

    /// Removes every session key
    fn clear(&self) -> Result<(), InfraError>;
}

type Entries = BTreeMap<String, String>;

/// JSON-file backed [`SessionStorage`]
pub struct FileSessionStorage {
    path:  PathBuf,
    /// Serializes read-modify-write cycles within the process
    write: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:  path.into(),
            write: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, InfraError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Entries::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), InfraError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Read-modify-write under the process lock
    ///
    /// A file that no longer parses is replaced instead of blocking every
    /// later write.
    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), InfraError> {
        let _guard = self.write.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) if matches!(e.kind(), InfraErrorKind::Serialization(_)) => {
                tracing::warn!(
                    error.category = error::category::INFRASTRUCTURE,
                    error.kind = error::kind::SESSION,
                    path = %self.path.display(),
                    "session file is corrupt, starting from an empty one: {}",
                    e
                );
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: SessionKey) -> Result<Option<String>, InfraError> {
        Ok(self.read_entries()?.remove(key.as_str()))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), InfraError> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn clear(&self) -> Result<(), InfraError> {
        self.update(|entries| {
            for key in SessionKey::ALL {
                entries.remove(key.as_str());
            }
        })
    }
}
