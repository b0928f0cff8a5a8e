//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use civic_core::CatalogError;
use civic_core::model::{
    AssistSettingsError, FeedbackError, Language, LessonError, LessonId, MeetingError, QuizError, UnitId,
};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::lessons::LessonStep;

/// Errors emitted by `LessonSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} from {from}")]
    InvalidTransition {
        from: LessonStep,
        action: &'static str,
    },
    #[error("lesson session already completed")]
    SessionClosed,
    #[error(transparent)]
    InvalidLesson(#[from] LessonError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `LessonFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonFlowError {
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),
    #[error("lesson not found: {0}")]
    LessonNotFound(LessonId),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Low-level failure behind `AssistError::RequestFailed`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistRequestError {
    #[error("assistant returned an empty response")]
    EmptyResponse,
    #[error("assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the assistant adapter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistError {
    #[error("assistant is not configured")]
    Unavailable,
    #[error(transparent)]
    RequestFailed(#[from] AssistRequestError),
}

impl AssistError {
    /// Short message suitable for showing inline instead of generated text.
    #[must_use]
    pub fn user_message(&self, language: Language) -> &'static str {
        match (self, language) {
            (AssistError::Unavailable, Language::Ar) => "⚠️ لم يتم إعداد مفتاح المساعد الذكي.",
            (AssistError::Unavailable, Language::En) => "⚠️ Assistant key is not configured.",
            (_, Language::Ar) => "حدث خطأ أثناء الاتصال بالمساعد. حاول مرة أخرى.",
            (_, Language::En) => "Error connecting to the assistant. Please try again.",
        }
    }
}

/// Errors emitted by `MeetingService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeetingServiceError {
    #[error(transparent)]
    Meeting(#[from] MeetingError),
    #[error("meeting not found: {0}")]
    MeetingNotFound(Uuid),
    #[error("meeting {meeting} has no decision {index}")]
    DecisionNotFound { meeting: Uuid, index: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `FeedbackService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedbackServiceError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error("cannot read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    AssistSettings(#[from] AssistSettingsError),
}
