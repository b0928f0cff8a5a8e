mod session;
mod workflow;

// Public API of the lesson subsystem.
pub use crate::error::{LessonFlowError, SessionError};
pub use session::{LessonSession, LessonStep};
pub use workflow::{LessonCompletion, LessonFlowService, UnitOverview};
