use std::sync::Arc;

use tracing::info;

use civic_core::Catalog;
use civic_core::model::{
    Lesson, LessonId, OverallProgress, ProgressUpdate, QuizOutcome, Unit, UnitId,
    UnitProgressSummary,
};
use civic_core::model::progress::summarize_unit;

use super::session::LessonSession;
use crate::error::LessonFlowError;
use crate::progress_store::ProgressStore;

/// Result of finishing a lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonCompletion {
    pub lesson_id: LessonId,
    pub outcome: QuizOutcome,
    /// Recomputed after the completion was stored.
    pub unit_progress: UnitProgressSummary,
}

/// A unit together with its current completion figures.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOverview {
    pub unit: Unit,
    pub summary: UnitProgressSummary,
}

/// Orchestrates lesson sessions against the catalog and the progress store.
#[derive(Clone)]
pub struct LessonFlowService {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressStore>,
}

impl LessonFlowService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, progress: Arc<ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn lesson(&self, lesson_id: &LessonId) -> Result<&Lesson, LessonFlowError> {
        self.catalog
            .get_lesson(lesson_id)
            .map_err(|_| LessonFlowError::LessonNotFound(lesson_id.clone()))
    }

    fn unit_lessons(&self, unit_id: &UnitId) -> Result<(&Unit, Vec<&Lesson>), LessonFlowError> {
        let unit = self
            .catalog
            .get_unit(unit_id)
            .map_err(|_| LessonFlowError::UnitNotFound(unit_id.clone()))?;
        Ok((unit, self.catalog.get_lessons_for_unit(unit_id)))
    }

    /// Start a fresh session at the overview.
    ///
    /// Previously completed lessons start over with an empty quiz; the saved
    /// reflection is pre-loaded.
    ///
    /// # Errors
    ///
    /// Returns `LessonFlowError::LessonNotFound` for an unknown lesson, or a
    /// storage error while reading the saved reflection.
    pub async fn start(&self, lesson_id: &LessonId) -> Result<LessonSession, LessonFlowError> {
        let lesson = self.lesson(lesson_id)?.clone();
        let saved = self.progress.get(lesson_id).await?;
        Ok(LessonSession::new(lesson, saved.reflection)?)
    }

    /// Update the session's reflection and persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns `LessonFlowError::Session` outside the reflection step, or a
    /// storage error.
    pub async fn save_reflection(
        &self,
        session: &mut LessonSession,
        text: impl Into<String>,
    ) -> Result<(), LessonFlowError> {
        let text = text.into();
        session.edit_reflection(text.clone())?;
        self.progress
            .upsert(session.lesson_id(), ProgressUpdate::reflection(text))
            .await?;
        Ok(())
    }

    /// Mark the lesson complete, storing the quiz score and reflection.
    ///
    /// The session only closes once the write succeeded, so a failed write
    /// can be retried.
    ///
    /// # Errors
    ///
    /// Returns `LessonFlowError::Session` unless the session is on the
    /// reflection step, or a storage error.
    pub async fn complete(
        &self,
        session: &mut LessonSession,
    ) -> Result<LessonCompletion, LessonFlowError> {
        let outcome = session.completion_outcome()?;
        let lesson_id = session.lesson_id().clone();
        let update = ProgressUpdate {
            completed: Some(true),
            reflection: Some(session.reflection().to_owned()),
            quiz_score: Some(outcome.score),
        };
        let progress = self.progress.upsert(&lesson_id, update).await?;
        session.complete()?;

        let unit_id = session.lesson().unit_id.clone();
        let (_, lessons) = self.unit_lessons(&unit_id)?;
        let unit_progress = summarize_unit(&progress, &unit_id, &lessons);
        info!(
            lesson = %lesson_id,
            score = outcome.score,
            total = outcome.total,
            unit_completed = unit_progress.completed_count,
            "lesson completed"
        );

        Ok(LessonCompletion {
            lesson_id,
            outcome,
            unit_progress,
        })
    }

    /// # Errors
    ///
    /// Returns `LessonFlowError::UnitNotFound` for an unknown unit, or a
    /// storage error.
    pub async fn unit_progress(
        &self,
        unit_id: &UnitId,
    ) -> Result<UnitProgressSummary, LessonFlowError> {
        let (_, lessons) = self.unit_lessons(unit_id)?;
        Ok(self.progress.summarize_unit(unit_id, &lessons).await?)
    }

    /// # Errors
    ///
    /// Returns a storage error if progress cannot be read.
    pub async fn overall_progress(&self) -> Result<OverallProgress, LessonFlowError> {
        Ok(self.progress.summarize_overall(&self.catalog).await?)
    }

    /// Every unit with its summary, in catalog order. Reads progress once.
    ///
    /// # Errors
    ///
    /// Returns a storage error if progress cannot be read.
    pub async fn unit_overview(&self) -> Result<Vec<UnitOverview>, LessonFlowError> {
        let progress = self.progress.load().await?;
        Ok(self
            .catalog
            .units()
            .iter()
            .map(|unit| UnitOverview {
                unit: unit.clone(),
                summary: summarize_unit(
                    &progress,
                    &unit.id,
                    &self.catalog.get_lessons_for_unit(&unit.id),
                ),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::{LessonStep, SessionError};
    use civic_core::model::Answer;
    use storage::Storage;

    fn service() -> LessonFlowService {
        let storage = Storage::in_memory();
        LessonFlowService::new(
            Arc::new(Catalog::builtin()),
            Arc::new(ProgressStore::new(storage.json())),
        )
    }

    async fn to_reflection(service: &LessonFlowService, id: &str) -> LessonSession {
        let mut session = service.start(&LessonId::new(id)).await.unwrap();
        while session.step() != LessonStep::Quiz {
            session.advance().unwrap();
        }
        session.answer(0, Answer::Choice(1)).unwrap();
        session.answer(1, Answer::Choice(0)).unwrap();
        session.answer(2, Answer::Truth(false)).unwrap();
        session.submit_quiz().unwrap();
        session.advance().unwrap();
        session
    }

    #[tokio::test]
    async fn unknown_lesson_and_unit_are_reported() {
        let service = service();
        assert!(matches!(
            service.start(&LessonId::new("U99L1")).await,
            Err(LessonFlowError::LessonNotFound(_))
        ));
        assert!(matches!(
            service.unit_progress(&UnitId::new("U99")).await,
            Err(LessonFlowError::UnitNotFound(_))
        ));
    }

    #[tokio::test]
    async fn completion_persists_score_and_bumps_unit_progress() {
        let service = service();
        let before = service.unit_progress(&UnitId::new("U1")).await.unwrap();
        assert_eq!(before.completed_count, 0);

        let mut session = to_reflection(&service, "U1L1").await;
        service.save_reflection(&mut session, "I will talk to the council").await.unwrap();
        let completion = service.complete(&mut session).await.unwrap();

        assert_eq!(completion.outcome.score, 2);
        assert_eq!(completion.unit_progress.completed_count, 1);
        assert_eq!(completion.unit_progress.total_count, 5);
        assert!((completion.unit_progress.percent - 20.0).abs() < 1e-9);

        let stored = service.progress.get(&LessonId::new("U1L1")).await.unwrap();
        assert!(stored.completed);
        assert_eq!(stored.quiz_score, Some(2));
        assert_eq!(stored.reflection, "I will talk to the council");

        let err = service.complete(&mut session).await.unwrap_err();
        assert!(matches!(
            err,
            LessonFlowError::Session(SessionError::SessionClosed)
        ));
        let after = service.unit_progress(&UnitId::new("U1")).await.unwrap();
        assert_eq!(after.completed_count, 1);
    }

    #[tokio::test]
    async fn restarting_a_completed_lesson_resets_the_quiz() {
        let service = service();
        let mut session = to_reflection(&service, "U2L1").await;
        service.save_reflection(&mut session, "notes").await.unwrap();
        service.complete(&mut session).await.unwrap();

        let again = service.start(&LessonId::new("U2L1")).await.unwrap();
        assert_eq!(again.step(), LessonStep::Overview);
        assert!(again.answers().is_empty());
        assert!(again.outcome().is_none());
        assert_eq!(again.reflection(), "notes");
    }

    #[tokio::test]
    async fn abandoned_session_keeps_only_saved_reflection() {
        let service = service();
        let mut session = to_reflection(&service, "U3L2").await;
        service.save_reflection(&mut session, "half a thought").await.unwrap();
        drop(session);

        let stored = service.progress.get(&LessonId::new("U3L2")).await.unwrap();
        assert!(!stored.completed);
        assert_eq!(stored.reflection, "half a thought");
        assert_eq!(stored.quiz_score, None);
    }

    #[tokio::test]
    async fn unit_overview_lists_all_units_in_order() {
        let service = service();
        let mut session = to_reflection(&service, "U20L5").await;
        service.complete(&mut session).await.unwrap();

        let overview = service.unit_overview().await.unwrap();
        assert_eq!(overview.len(), 20);
        assert_eq!(overview[0].unit.id, UnitId::new("U1"));
        assert_eq!(overview[19].summary.completed_count, 1);

        let overall = service.overall_progress().await.unwrap();
        assert_eq!((overall.completed_count, overall.total_count), (1, 100));
    }
}
