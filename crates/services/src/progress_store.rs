use tokio::sync::Mutex;
use tracing::debug;

use civic_core::Catalog;
use civic_core::model::progress::{apply_update, summarize_overall, summarize_unit};
use civic_core::model::{
    Lesson, LessonId, LessonProgress, OverallProgress, ProgressMap, ProgressUpdate, UnitId,
    UnitProgressSummary,
};
use storage::{JsonStore, StorageError, StorageKey};

/// Durable per-lesson progress, stored as one JSON map.
///
/// Writes are read-modify-write cycles over the whole map, so they are
/// serialized through an async mutex.
pub struct ProgressStore {
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Load every record. Missing or unreadable data yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn load(&self) -> Result<ProgressMap, StorageError> {
        self.store.get_or_default(StorageKey::Progress).await
    }

    /// Record for one lesson, or the default record if none was written yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn get(&self, lesson_id: &LessonId) -> Result<LessonProgress, StorageError> {
        let mut progress = self.load().await?;
        Ok(progress.remove(lesson_id).unwrap_or_default())
    }

    /// Merge `update` into the lesson's record and write the whole map back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub async fn upsert(
        &self,
        lesson_id: &LessonId,
        update: ProgressUpdate,
    ) -> Result<ProgressMap, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut progress = self.load().await?;
        apply_update(&mut progress, lesson_id, update);
        self.store.set(StorageKey::Progress, &progress).await?;
        debug!(lesson = %lesson_id, records = progress.len(), "progress saved");
        Ok(progress)
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn summarize_unit(
        &self,
        unit_id: &UnitId,
        lessons_of_unit: &[&Lesson],
    ) -> Result<UnitProgressSummary, StorageError> {
        let progress = self.load().await?;
        Ok(summarize_unit(&progress, unit_id, lessons_of_unit))
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn summarize_overall(&self, catalog: &Catalog) -> Result<OverallProgress, StorageError> {
        let progress = self.load().await?;
        Ok(summarize_overall(&progress, catalog.lessons()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::Storage;
    use storage::repository::KeyValueStore;

    fn store() -> (Storage, ProgressStore) {
        let storage = Storage::in_memory();
        let progress = ProgressStore::new(storage.json());
        (storage, progress)
    }

    #[tokio::test]
    async fn partial_updates_preserve_other_fields() {
        let (_, store) = store();
        let id = LessonId::new("U1L1");

        store.upsert(&id, ProgressUpdate::reflection("my notes")).await.unwrap();
        let map = store.upsert(&id, ProgressUpdate::completed()).await.unwrap();

        let record = &map[&id];
        assert!(record.completed);
        assert_eq!(record.reflection, "my notes");
        assert_eq!(store.get(&id).await.unwrap(), *record);
    }

    #[tokio::test]
    async fn saving_the_same_reflection_twice_is_idempotent() {
        let (_, store) = store();
        let id = LessonId::new("U2L3");
        let first = store.upsert(&id, ProgressUpdate::reflection("x")).await.unwrap();
        let second = store.upsert(&id, ProgressUpdate::reflection("x")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn corrupt_stored_progress_loads_as_empty() {
        let (storage, store) = store();
        storage
            .entries
            .set_raw("civic_progress", "[1, 2")
            .await
            .unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_upserts_do_not_lose_writes() {
        let (_, store) = store();
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for n in 1..=8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let id = LessonId::new(format!("U1L{n}"));
                store.upsert(&id, ProgressUpdate::completed()).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn overall_progress_counts_only_catalog_lessons() {
        let (_, store) = store();
        let catalog = Catalog::builtin();
        store
            .upsert(&LessonId::new("U1L1"), ProgressUpdate::completed())
            .await
            .unwrap();
        store
            .upsert(&LessonId::new("OLD1"), ProgressUpdate::completed())
            .await
            .unwrap();

        let overall = store.summarize_overall(&catalog).await.unwrap();
        assert_eq!(overall.completed_count, 1);
        assert_eq!(overall.total_count, 100);
        assert!((overall.percent - 1.0).abs() < 1e-9);
    }
}
