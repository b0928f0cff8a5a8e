use std::path::Path;
use std::sync::Arc;

use civic_core::{Catalog, Library};
use storage::Storage;
use tracing::debug;

use crate::Clock;
use crate::assist::{AssistConfig, AssistService};
use crate::error::AppServicesError;
use crate::feedback_service::FeedbackService;
use crate::lessons::LessonFlowService;
use crate::meeting_service::MeetingService;
use crate::preferences_service::PreferencesService;
use crate::progress_store::ProgressStore;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    library: Arc<Library>,
    progress: Arc<ProgressStore>,
    lessons: Arc<LessonFlowService>,
    meetings: Arc<MeetingService>,
    feedback: Arc<FeedbackService>,
    preferences: Arc<PreferencesService>,
    assist: Arc<AssistService>,
}

/// Read a custom catalog from `path`, or fall back to the built-in one.
///
/// # Errors
///
/// Returns `AppServicesError::CatalogRead` if the file cannot be read and
/// `AppServicesError::Catalog` if it is not a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppServicesError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = std::fs::read_to_string(path).map_err(|source| AppServicesError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;
    debug!(path = %path.display(), lessons = catalog.lessons().len(), "loaded custom catalog");
    Ok(catalog)
}

impl AppServices {
    /// Build `SQLite`-backed services from the process environment: the
    /// catalog at `catalog_path` (built-in when `None`) and the assistant
    /// settings in `CIVIC_AI_*`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog cannot be loaded, the
    /// assistant settings are invalid, or storage initialization fails.
    pub async fn bootstrap(
        db_url: &str,
        clock: Clock,
        catalog_path: Option<&Path>,
    ) -> Result<Self, AppServicesError> {
        let catalog = load_catalog(catalog_path)?;
        let assist = AssistConfig::from_env()?;
        Self::new_sqlite(db_url, clock, catalog, assist).await
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        catalog: Catalog,
        assist: Option<AssistConfig>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, catalog, assist))
    }

    /// Build services over a fresh in-memory backend.
    #[must_use]
    pub fn in_memory(clock: Clock, catalog: Catalog, assist: Option<AssistConfig>) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, catalog, assist)
    }

    #[must_use]
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        catalog: Catalog,
        assist: Option<AssistConfig>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressStore::new(storage.json()));
        let lessons = Arc::new(LessonFlowService::new(
            Arc::clone(&catalog),
            Arc::clone(&progress),
        ));
        let meetings = Arc::new(MeetingService::new(clock, storage.json()));
        let feedback = Arc::new(FeedbackService::new(clock, storage.json()));
        let preferences = Arc::new(PreferencesService::new(storage.json()));
        let assist = Arc::new(AssistService::new(assist));

        Self {
            catalog,
            library: Arc::new(Library::builtin()),
            progress,
            lessons,
            meetings,
            feedback,
            preferences,
            assist,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn library(&self) -> Arc<Library> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonFlowService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn meetings(&self) -> Arc<MeetingService> {
        Arc::clone(&self.meetings)
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<FeedbackService> {
        Arc::clone(&self.feedback)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn assist(&self) -> Arc<AssistService> {
        Arc::clone(&self.assist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalog_path_uses_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.lessons().len(), 100);
    }

    #[test]
    fn unreadable_or_invalid_catalog_files_are_reported() {
        let missing = std::env::temp_dir().join("civic-no-such-catalog.json");
        assert!(matches!(
            load_catalog(Some(&missing)),
            Err(AppServicesError::CatalogRead { .. })
        ));

        let invalid = std::env::temp_dir().join(format!(
            "civic-invalid-catalog-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&invalid, r#"{"units": [{"id": " ", "title": {"ar": "", "en": ""}}], "lessons": []}"#)
            .unwrap();
        let result = load_catalog(Some(&invalid));
        std::fs::remove_file(&invalid).unwrap();
        assert!(matches!(result, Err(AppServicesError::Catalog(_))));
    }

    #[tokio::test]
    async fn bootstrap_builds_services_over_sqlite() {
        let app = AppServices::bootstrap(
            "sqlite:file:memdb_bootstrap?mode=memory&cache=shared",
            civic_core::time::fixed_clock(),
            None,
        )
        .await
        .unwrap();
        assert_eq!(app.catalog().units().len(), 20);
        assert!(app.meetings().list().await.unwrap().is_empty());
    }
}
