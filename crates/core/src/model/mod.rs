mod assist_settings;
mod feedback;
mod ids;
mod lesson;
mod locale;
mod meeting;
pub mod progress;
pub mod question;
pub mod quiz;

pub use ids::{LessonId, ParseIdError, UnitId};
pub use locale::{Language, Localized, UnknownLanguage};

pub use assist_settings::{AssistSettings, AssistSettingsDraft, AssistSettingsError};
pub use feedback::{Feedback, FeedbackDraft, FeedbackError};
pub use lesson::{Lesson, LessonError, LessonLevel, MiniTask, Unit};
pub use meeting::{Decision, DecisionDraft, DecisionStatus, Meeting, MeetingDraft, MeetingError};
pub use progress::{
    LessonProgress, OverallProgress, ProgressMap, ProgressUpdate, UnitProgressSummary,
};
pub use question::{Answer, Question, QuestionError};
pub use quiz::{QuestionFeedback, QuizAnswerSet, QuizError, QuizOutcome};
