// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value stores backing the preference controllers.
//!
//! Controllers talk to a [`PreferenceStore`] rather than to the filesystem,
//! so tests can substitute an in-memory store and inspect every write.

use crate::config::{self, Preferences};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A durable string-keyed store. Reads that find nothing return `None`;
/// writes always succeed from the caller's point of view.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Shared single-threaded handle to a store.
pub type SharedStore = Rc<RefCell<dyn PreferenceStore>>;

/// Map-backed store for tests and embedding hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Disk-backed store persisting a [`Preferences`] record as TOML.
///
/// Every `set` writes through to disk. Write failures are reported to stderr
/// and otherwise ignored; the in-memory record stays authoritative for the
/// rest of the session.
pub struct FileStore {
    prefs: Preferences,
    path: Option<PathBuf>,
}

impl FileStore {
    /// Opens the store at the platform default location, loading whatever is
    /// already persisted there.
    pub fn new() -> Self {
        Self {
            prefs: config::load().unwrap_or_default(),
            path: None,
        }
    }

    /// Opens the store at an explicit path (used by tests).
    pub fn from_path(path: &Path) -> Self {
        let prefs = if path.exists() {
            config::load_from_path(path).unwrap_or_default()
        } else {
            Preferences::default()
        };
        Self {
            prefs,
            path: Some(path.to_path_buf()),
        }
    }

    fn persist(&self) {
        let result = match &self.path {
            Some(path) => config::save_to_path(&self.prefs, path),
            None => config::save(&self.prefs),
        };
        if let Err(error) = result {
            eprintln!("Failed to save preferences: {:?}", error);
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.prefs.set(key, value);
        self.persist();
    }
}
