use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use civic_core::Clock;
use civic_core::model::{DecisionStatus, Language, Meeting, MeetingDraft};
use storage::{JsonStore, StorageKey};

use crate::error::MeetingServiceError;

/// Local log of community meetings, newest first.
pub struct MeetingService {
    clock: Clock,
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl MeetingService {
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
    /// Returns `MeetingServiceError::Storage` if the backend cannot be read.
    pub async fn list(&self) -> Result<Vec<Meeting>, MeetingServiceError> {
        Ok(self.store.get_or_default(StorageKey::Meetings).await?)
    }

    /// Validate `draft` and put it at the top of the log.
    ///
    /// # Errors
    ///
    /// Returns `MeetingServiceError::Meeting` for invalid drafts, or a storage error.
    pub async fn record(
        &self,
        draft: MeetingDraft,
        language: Language,
    ) -> Result<Meeting, MeetingServiceError> {
        let meeting = draft.validate(self.clock.now(), language)?;
        let _guard = self.write_lock.lock().await;
        let mut meetings = self.list().await?;
        meetings.insert(0, meeting.clone());
        self.store.set(StorageKey::Meetings, &meetings).await?;
        debug!(meeting = %meeting.id, decisions = meeting.decisions.len(), "meeting recorded");
        Ok(meeting)
    }

    /// # Errors
    ///
    /// Returns `MeetingNotFound`/`DecisionNotFound` for unknown targets, or a storage error.
    pub async fn set_decision_status(
        &self,
        meeting_id: Uuid,
        decision_index: usize,
        status: DecisionStatus,
    ) -> Result<Meeting, MeetingServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut meetings = self.list().await?;
        let meeting = meetings
            .iter_mut()
            .find(|m| m.id == meeting_id)
            .ok_or(MeetingServiceError::MeetingNotFound(meeting_id))?;
        let decision = meeting.decisions.get_mut(decision_index).ok_or(
            MeetingServiceError::DecisionNotFound {
                meeting: meeting_id,
                index: decision_index,
            },
        )?;
        decision.status = status;
        let updated = meeting.clone();
        self.store.set(StorageKey::Meetings, &meetings).await?;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `MeetingNotFound` for an unknown id, or a storage error.
    pub async fn delete(&self, meeting_id: Uuid) -> Result<(), MeetingServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut meetings = self.list().await?;
        let before = meetings.len();
        meetings.retain(|m| m.id != meeting_id);
        if meetings.len() == before {
            return Err(MeetingServiceError::MeetingNotFound(meeting_id));
        }
        self.store.set(StorageKey::Meetings, &meetings).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::model::DecisionDraft;
    use civic_core::time::fixed_clock;
    use storage::Storage;

    fn service() -> MeetingService {
        MeetingService::new(fixed_clock(), Storage::in_memory().json())
    }

    fn draft(title: &str) -> MeetingDraft {
        MeetingDraft {
            title: title.into(),
            attendees: vec!["Rana".into(), " ".into()],
            agenda: vec!["Water network".into()],
            decisions: vec![DecisionDraft {
                text: "Survey the north district".into(),
                owner: "Committee".into(),
                ..DecisionDraft::default()
            }],
        }
    }

    #[tokio::test]
    async fn newest_meeting_comes_first() {
        let service = service();
        service.record(draft("first"), Language::En).await.unwrap();
        let second = service.record(draft(""), Language::Ar).await.unwrap();

        let meetings = service.list().await.unwrap();
        assert_eq!(meetings.len(), 2);
        assert_eq!(meetings[0].id, second.id);
        assert_eq!(meetings[0].title, "اجتماع بدون عنوان");
        assert_eq!(meetings[1].attendees, vec!["Rana".to_string()]);
    }

    #[tokio::test]
    async fn decision_status_can_be_completed() {
        let service = service();
        let meeting = service.record(draft("m"), Language::En).await.unwrap();
        assert_eq!(meeting.decisions[0].status, DecisionStatus::Pending);

        let updated = service
            .set_decision_status(meeting.id, 0, DecisionStatus::Completed)
            .await
            .unwrap();
        assert_eq!(updated.decisions[0].status, DecisionStatus::Completed);
        assert_eq!(
            service.list().await.unwrap()[0].decisions[0].status,
            DecisionStatus::Completed
        );

        let err = service
            .set_decision_status(meeting.id, 5, DecisionStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, MeetingServiceError::DecisionNotFound { index: 5, .. }));
    }

    #[tokio::test]
    async fn delete_removes_only_known_meetings() {
        let service = service();
        let meeting = service.record(draft("m"), Language::En).await.unwrap();
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(MeetingServiceError::MeetingNotFound(_))
        ));
        service.delete(meeting.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
