use tracing::info;

use civic_core::model::Language;
use storage::{JsonStore, StorageError, StorageKey};

/// Learner preferences and the full local reset.
#[derive(Clone)]
pub struct PreferencesService {
    store: JsonStore,
}

impl PreferencesService {
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Stored interface language, Arabic when unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn language(&self) -> Result<Language, StorageError> {
        self.store.get_or_default(StorageKey::Language).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.store.set(StorageKey::Language, &language).await
    }

    /// Erase all progress, meetings, feedback and preferences.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn reset_all(&self) -> Result<(), StorageError> {
        self.store.clear().await?;
        info!("local data cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::model::{LessonId, ProgressUpdate};
    use storage::Storage;

    use crate::progress_store::ProgressStore;

    #[tokio::test]
    async fn language_defaults_to_arabic_and_persists() {
        let prefs = PreferencesService::new(Storage::in_memory().json());
        assert_eq!(prefs.language().await.unwrap(), Language::Ar);
        prefs.set_language(Language::En).await.unwrap();
        assert_eq!(prefs.language().await.unwrap(), Language::En);
    }

    #[tokio::test]
    async fn reset_erases_progress_and_language() {
        let storage = Storage::in_memory();
        let prefs = PreferencesService::new(storage.json());
        let progress = ProgressStore::new(storage.json());

        prefs.set_language(Language::En).await.unwrap();
        progress
            .upsert(&LessonId::new("U1L1"), ProgressUpdate::completed())
            .await
            .unwrap();

        prefs.reset_all().await.unwrap();
        assert!(progress.load().await.unwrap().is_empty());
        assert_eq!(prefs.language().await.unwrap(), Language::Ar);
    }
}
