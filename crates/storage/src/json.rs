//! Typed JSON layer over a [`KeyValueStore`].
//!
//! Reads never fail on bad data: a missing or undecodable value yields the
//! caller's default and the problem is logged. Backend I/O errors still
//! propagate.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::repository::{KeyValueStore, StorageError};

/// Well-known keys used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Progress,
    Meetings,
    Feedback,
    Language,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Progress => "civic_progress",
            StorageKey::Meetings => "civic_meetings",
            StorageKey::Feedback => "civic_feedback",
            StorageKey::Language => "civic_lang",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Decode the value under `key`, or return `default` when it is absent
    /// or cannot be decoded as `T`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    pub async fn get<T>(&self, key: StorageKey, default: T) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.backend.get_raw(key.as_str()).await? else {
            debug!(%key, "no stored value, using default");
            return Ok(default);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(%key, error = %err, "stored value is unreadable, using default");
                Ok(default)
            }
        }
    }

    /// Shorthand for [`JsonStore::get`] with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    pub async fn get_or_default<T>(&self, key: StorageKey) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        self.get(key, T::default()).await
    }

    /// Encode `value` and replace whatever is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails, or a backend error.
    pub async fn set<T>(&self, key: StorageKey, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let raw =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        debug!(%key, bytes = raw.len(), "writing value");
        self.backend.set_raw(key.as_str(), &raw).await
    }

    /// Remove every application key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.backend.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryKeyValueStore;
    use std::collections::BTreeMap;

    fn store() -> (Arc<InMemoryKeyValueStore>, JsonStore) {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let json = JsonStore::new(backend.clone());
        (backend, json)
    }

    #[tokio::test]
    async fn missing_key_yields_default() {
        let (_, json) = store();
        let value: Vec<String> = json.get(StorageKey::Meetings, vec!["x".into()]).await.unwrap();
        assert_eq!(value, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_value_yields_default() {
        let (backend, json) = store();
        backend.set_raw("civic_progress", "{not json").await.unwrap();
        let value: BTreeMap<String, u32> = json.get_or_default(StorageKey::Progress).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn set_then_get_uses_the_key_name() {
        let (backend, json) = store();
        json.set(StorageKey::Language, "en").await.unwrap();
        assert_eq!(
            backend.get_raw("civic_lang").await.unwrap().as_deref(),
            Some("\"en\"")
        );
        let lang: String = json.get(StorageKey::Language, String::new()).await.unwrap();
        assert_eq!(lang, "en");
    }
}
