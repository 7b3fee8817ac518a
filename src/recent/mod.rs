//! Most-recent-first list of past queries, kept in a [`KeyValueStore`].
//!
//! The list is stored under one key as a JSON array of strings. Reads and
//! writes never fail outward: storage problems are logged and the caller
//! sees an empty list.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_RECENT_KEY, DEFAULT_RECENT_MAX};

pub struct RecentSearches<S> {
    store: S,
    key: String,
    max_entries: usize,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// `max_entries` below one is raised to one.
    pub fn new(store: S, key: impl Into<String>, max_entries: usize) -> Self {
        Self {
            store,
            key: key.into(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, DEFAULT_RECENT_KEY, DEFAULT_RECENT_MAX)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Record `query` as the most recent search and return the new list.
    ///
    /// A query already in the list moves to the front. Blank queries are
    /// ignored and leave storage untouched.
    pub fn add(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let existing = match self.read() {
            Ok(list) => list,
            Err(StorageError::Corrupt(err)) => {
                warn!(key = %self.key, error = %err, "discarding unreadable recent searches");
                Vec::new()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to save recent searches");
                return Vec::new();
            }
        };

        let mut updated = Vec::with_capacity(self.max_entries);
        updated.push(query.to_string());
        updated.extend(existing.into_iter().filter(|s| s != query));
        updated.truncate(self.max_entries);

        if let Err(err) = self.write(&updated) {
            warn!(key = %self.key, error = %err, "failed to save recent searches");
            return Vec::new();
        }

        debug!(key = %self.key, len = updated.len(), "recent searches updated");
        updated
    }

    /// The persisted list, or empty if nothing usable is stored.
    pub fn load(&self) -> Vec<String> {
        match self.read() {
            Ok(list) => list,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to load recent searches");
                Vec::new()
            }
        }
    }

    /// Forget every recorded search.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(&self.key) {
            warn!(key = %self.key, error = %err, "failed to clear recent searches");
        }
    }

    // Non-array values read as empty; non-string elements are dropped.
    fn read(&self) -> Result<Vec<String>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let list = match serde_json::from_str::<Value>(&raw)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(list)
    }

    fn write(&self, list: &[String]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(list)?;
        self.store.set(&self.key, &encoded)
    }
}

impl RecentSearches<FileStore> {
    /// File-backed list using the configured path, key and size.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            FileStore::new(config.store_path()),
            config.recent_key(),
            config.recent_max(),
        )
    }
}
