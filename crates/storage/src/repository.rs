use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::JsonStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Raw key/value contract every backend implements.
///
/// Values are opaque strings; typed access goes through [`JsonStore`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop every stored entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory backend for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

/// Wraps the selected backend behind a trait object for easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub entries: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let entries: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        Self { entries }
    }

    /// Typed JSON view over the same backend.
    #[must_use]
    pub fn json(&self) -> JsonStore {
        JsonStore::new(Arc::clone(&self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get_raw("a").await.unwrap(), None);

        store.set_raw("a", "1").await.unwrap();
        store.set_raw("a", "2").await.unwrap();
        assert_eq!(store.get_raw("a").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn clones_share_entries_and_clear_drops_all() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();
        store.set_raw("a", "1").await.unwrap();
        store.set_raw("b", "2").await.unwrap();
        assert_eq!(other.get_raw("b").await.unwrap().as_deref(), Some("2"));

        other.clear().await.unwrap();
        assert_eq!(store.get_raw("a").await.unwrap(), None);
    }
}
