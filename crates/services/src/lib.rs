#![forbid(unsafe_code)]

pub mod app_services;
pub mod assist;
pub mod error;
pub mod feedback_service;
pub mod lessons;
pub mod meeting_service;
pub mod preferences_service;
pub mod progress_store;

pub use civic_core::Clock;

pub use app_services::AppServices;
pub use assist::{AssistConfig, AssistService, TextGenerator};
pub use error::{
    AppServicesError, AssistError, AssistRequestError, FeedbackServiceError, LessonFlowError,
    MeetingServiceError, SessionError,
};
pub use feedback_service::FeedbackService;
pub use lessons::{LessonCompletion, LessonFlowService, LessonSession, LessonStep, UnitOverview};
pub use meeting_service::MeetingService;
pub use preferences_service::PreferencesService;
pub use progress_store::ProgressStore;
