use tokio::sync::Mutex;
use tracing::debug;

use civic_core::Clock;
use civic_core::model::{Feedback, FeedbackDraft};
use storage::{JsonStore, StorageKey};

use crate::error::FeedbackServiceError;

/// Citizen feedback box, newest first.
pub struct FeedbackService {
    clock: Clock,
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl FeedbackService {
    #[must_use]
    pub fn new(clock: Clock, store: JsonStore) -> Self {
        Self {
            clock,
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// # Errors
    ///
    /// Returns `FeedbackServiceError::Storage` if the backend cannot be read.
    pub async fn list(&self) -> Result<Vec<Feedback>, FeedbackServiceError> {
        Ok(self.store.get_or_default(StorageKey::Feedback).await?)
    }

    /// # Errors
    ///
    /// Returns `FeedbackServiceError::Feedback` for a blank message, or a storage error.
    pub async fn submit(&self, draft: FeedbackDraft) -> Result<Feedback, FeedbackServiceError> {
        let feedback = draft.validate(self.clock.now())?;
        let _guard = self.write_lock.lock().await;
        let mut all = self.list().await?;
        all.insert(0, feedback.clone());
        self.store.set(StorageKey::Feedback, &all).await?;
        debug!(category = %feedback.category, anonymous = feedback.is_anonymous, "feedback stored");
        Ok(feedback)
    }
}
