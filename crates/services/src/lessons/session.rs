use std::fmt;

use civic_core::model::quiz::score;
use civic_core::model::{Answer, Lesson, LessonId, QuizAnswerSet, QuizOutcome};

use crate::error::SessionError;

//
// ─── STEPS ─────────────────────────────────────────────────────────────────────
//

/// Where a learner currently is inside a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStep {
    Overview,
    /// 0-based index into the lesson's sections.
    Content(usize),
    Scenario,
    Quiz,
    /// Quiz submitted; answers are locked and the outcome is shown.
    Scored,
    Reflection,
    Complete,
}

impl fmt::Display for LessonStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonStep::Overview => f.write_str("overview"),
            LessonStep::Content(index) => write!(f, "content section {}", index + 1),
            LessonStep::Scenario => f.write_str("scenario"),
            LessonStep::Quiz => f.write_str("quiz"),
            LessonStep::Scored => f.write_str("quiz results"),
            LessonStep::Reflection => f.write_str("reflection"),
            LessonStep::Complete => f.write_str("complete"),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory walk through one lesson.
///
/// Holds the quiz answers and the reflection draft. Nothing here touches
/// storage; `LessonFlowService` persists reflection edits and completion.
pub struct LessonSession {
    lesson: Lesson,
    step: LessonStep,
    answers: QuizAnswerSet,
    outcome: Option<QuizOutcome>,
    reflection: String,
}

impl LessonSession {
    /// Start at the overview with no answers. `reflection` is the previously
    /// saved text, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidLesson` if the lesson has no sections or
    /// a malformed question.
    pub fn new(lesson: Lesson, reflection: impl Into<String>) -> Result<Self, SessionError> {
        lesson.validate()?;
        Ok(Self {
            lesson,
            step: LessonStep::Overview,
            answers: QuizAnswerSet::new(),
            outcome: None,
            reflection: reflection.into(),
        })
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson.id
    }

    #[must_use]
    pub fn step(&self) -> LessonStep {
        self.step
    }

    #[must_use]
    pub fn answers(&self) -> &QuizAnswerSet {
        &self.answers
    }

    /// Quiz outcome once submitted.
    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn reflection(&self) -> &str {
        &self.reflection
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step == LessonStep::Complete
    }

    /// `(current, total)` 1-based step ordinal for progress bars. Overview,
    /// each section, scenario, quiz and reflection count as one step each.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        let sections = self.lesson.section_count();
        let current = match self.step {
            LessonStep::Overview => 1,
            LessonStep::Content(index) => index + 2,
            LessonStep::Scenario => sections + 2,
            LessonStep::Quiz | LessonStep::Scored => sections + 3,
            LessonStep::Reflection | LessonStep::Complete => sections + 4,
        };
        (current, sections + 4)
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionClosed);
        }
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            from: self.step,
            action,
        }
    }

    /// Move one step forward.
    ///
    /// The quiz is left through [`LessonSession::submit_quiz`] and the
    /// reflection through [`LessonSession::complete`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` from `Quiz` or `Reflection`,
    /// and `SessionError::SessionClosed` once complete.
    pub fn advance(&mut self) -> Result<LessonStep, SessionError> {
        self.ensure_open()?;
        let last_section = self.lesson.section_count().saturating_sub(1);
        let next = match self.step {
            LessonStep::Overview => LessonStep::Content(0),
            LessonStep::Content(index) if index < last_section => LessonStep::Content(index + 1),
            LessonStep::Content(_) => LessonStep::Scenario,
            LessonStep::Scenario => LessonStep::Quiz,
            LessonStep::Scored => LessonStep::Reflection,
            LessonStep::Quiz | LessonStep::Reflection | LessonStep::Complete => {
                return Err(self.invalid("advance"));
            }
        };
        self.step = next;
        Ok(next)
    }

    /// Move one step back. Quiz answers survive going back to the scenario.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` from `Overview`, `Scored`
    /// or `Reflection`, and `SessionError::SessionClosed` once complete.
    pub fn back(&mut self) -> Result<LessonStep, SessionError> {
        self.ensure_open()?;
        let last_section = self.lesson.section_count().saturating_sub(1);
        let previous = match self.step {
            LessonStep::Content(0) => LessonStep::Overview,
            LessonStep::Content(index) => LessonStep::Content(index - 1),
            LessonStep::Scenario => LessonStep::Content(last_section),
            LessonStep::Quiz => LessonStep::Scenario,
            LessonStep::Overview
            | LessonStep::Scored
            | LessonStep::Reflection
            | LessonStep::Complete => return Err(self.invalid("go back")),
        };
        self.step = previous;
        Ok(previous)
    }

    /// Record (or replace) the answer to question `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the quiz and
    /// `SessionError::Quiz` for an unknown question or mismatched answer.
    pub fn answer(&mut self, index: usize, answer: Answer) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.step != LessonStep::Quiz {
            return Err(self.invalid("answer a question"));
        }
        self.answers.record(&self.lesson.questions, index, answer)?;
        Ok(())
    }

    /// Score the quiz and lock the answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Quiz` with `QuizError::IncompleteAnswers` when
    /// a question is unanswered; the session stays on the quiz.
    pub fn submit_quiz(&mut self) -> Result<&QuizOutcome, SessionError> {
        self.ensure_open()?;
        if self.step != LessonStep::Quiz {
            return Err(self.invalid("submit the quiz"));
        }
        let outcome = score(&self.lesson.questions, &self.answers)?;
        self.step = LessonStep::Scored;
        Ok(&*self.outcome.insert(outcome))
    }

    /// Replace the reflection draft.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the reflection step.
    pub fn edit_reflection(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.step != LessonStep::Reflection {
            return Err(self.invalid("edit the reflection"));
        }
        self.reflection = text.into();
        Ok(())
    }

    /// Outcome the session would complete with, without changing state.
    pub(crate) fn completion_outcome(&self) -> Result<QuizOutcome, SessionError> {
        self.ensure_open()?;
        if self.step != LessonStep::Reflection {
            return Err(self.invalid("complete the lesson"));
        }
        self.outcome
            .clone()
            .ok_or_else(|| self.invalid("complete the lesson"))
    }

    /// Finish the lesson. Succeeds exactly once.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the reflection step
    /// and `SessionError::SessionClosed` if already complete.
    pub fn complete(&mut self) -> Result<QuizOutcome, SessionError> {
        let outcome = self.completion_outcome()?;
        self.step = LessonStep::Complete;
        Ok(outcome)
    }
}

impl fmt::Debug for LessonSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonSession")
            .field("lesson_id", &self.lesson.id)
            .field("step", &self.step)
            .field("answered", &self.answers.answered_count())
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::Catalog;
    use civic_core::model::{LessonError, QuizError};

    fn u1l1() -> Lesson {
        Catalog::builtin()
            .get_lesson(&LessonId::new("U1L1"))
            .unwrap()
            .clone()
    }

    fn at_quiz() -> LessonSession {
        let mut session = LessonSession::new(u1l1(), "").unwrap();
        while session.step() != LessonStep::Quiz {
            session.advance().unwrap();
        }
        session
    }

    fn answer_all(session: &mut LessonSession) {
        session.answer(0, Answer::Choice(1)).unwrap();
        session.answer(1, Answer::Choice(0)).unwrap();
        session.answer(2, Answer::Truth(false)).unwrap();
    }

    #[test]
    fn walks_forward_through_every_section() {
        let mut session = LessonSession::new(u1l1(), "").unwrap();
        assert_eq!(session.position(), (1, 9));

        let mut steps = Vec::new();
        while session.step() != LessonStep::Quiz {
            steps.push(session.advance().unwrap());
        }
        assert_eq!(
            steps,
            vec![
                LessonStep::Content(0),
                LessonStep::Content(1),
                LessonStep::Content(2),
                LessonStep::Content(3),
                LessonStep::Content(4),
                LessonStep::Scenario,
                LessonStep::Quiz,
            ]
        );
        assert_eq!(session.position(), (8, 9));
    }

    #[test]
    fn back_navigation_is_free_before_the_quiz() {
        let mut session = LessonSession::new(u1l1(), "").unwrap();
        assert!(matches!(
            session.back(),
            Err(SessionError::InvalidTransition { from: LessonStep::Overview, .. })
        ));

        session.advance().unwrap();
        assert_eq!(session.back().unwrap(), LessonStep::Overview);

        let mut session = at_quiz();
        assert_eq!(session.back().unwrap(), LessonStep::Scenario);
        assert_eq!(session.back().unwrap(), LessonStep::Content(4));
    }

    #[test]
    fn answers_survive_leaving_the_quiz() {
        let mut session = at_quiz();
        session.answer(0, Answer::Choice(1)).unwrap();
        session.back().unwrap();
        session.advance().unwrap();
        assert_eq!(session.answers().get(0), Some(Answer::Choice(1)));
    }

    #[test]
    fn answering_outside_the_quiz_is_rejected() {
        let mut session = LessonSession::new(u1l1(), "").unwrap();
        let err = session.answer(0, Answer::Choice(1)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { .. }));
    }

    #[test]
    fn incomplete_quiz_stays_on_quiz() {
        let mut session = at_quiz();
        session.answer(0, Answer::Choice(1)).unwrap();
        session.answer(1, Answer::Choice(1)).unwrap();

        let err = session.submit_quiz().unwrap_err();
        assert_eq!(
            err,
            SessionError::Quiz(QuizError::IncompleteAnswers {
                answered: 2,
                total: 3
            })
        );
        assert_eq!(session.step(), LessonStep::Quiz);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn advance_cannot_skip_the_quiz() {
        let mut session = at_quiz();
        assert!(matches!(
            session.advance(),
            Err(SessionError::InvalidTransition { from: LessonStep::Quiz, .. })
        ));
    }

    #[test]
    fn submitted_answers_are_locked() {
        let mut session = at_quiz();
        answer_all(&mut session);
        let outcome = session.submit_quiz().unwrap();
        assert_eq!(outcome.score, 2);

        assert!(session.answer(0, Answer::Choice(0)).is_err());
        assert!(session.back().is_err());
        assert_eq!(session.outcome().map(|o| o.score), Some(2));
    }

    #[test]
    fn completes_exactly_once() {
        let mut session = at_quiz();
        answer_all(&mut session);
        session.submit_quiz().unwrap();
        assert_eq!(session.advance().unwrap(), LessonStep::Reflection);
        assert!(session.back().is_err());

        session.edit_reflection("draft").unwrap();
        session.edit_reflection("final").unwrap();
        assert_eq!(session.reflection(), "final");

        let outcome = session.complete().unwrap();
        assert_eq!(outcome.score, 2);
        assert!(session.is_complete());

        assert_eq!(session.complete().unwrap_err(), SessionError::SessionClosed);
        assert_eq!(session.advance().unwrap_err(), SessionError::SessionClosed);
        assert_eq!(
            session.edit_reflection("late").unwrap_err(),
            SessionError::SessionClosed
        );
    }

    #[test]
    fn single_section_lesson_goes_straight_to_scenario() {
        let mut lesson = u1l1();
        lesson.sections.truncate(1);
        let mut session = LessonSession::new(lesson, "").unwrap();
        session.advance().unwrap();
        assert_eq!(session.advance().unwrap(), LessonStep::Scenario);
        assert_eq!(session.back().unwrap(), LessonStep::Content(0));
        assert_eq!(session.position(), (2, 5));
    }

    #[test]
    fn lessons_without_sections_cannot_start() {
        let mut lesson = u1l1();
        lesson.sections.clear();
        assert!(matches!(
            LessonSession::new(lesson, ""),
            Err(SessionError::InvalidLesson(LessonError::NoSections(_)))
        ));
    }
}
