use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{LessonId, UnitId};
use crate::model::locale::Localized;
use crate::model::question::{Question, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson {0} has no content sections")]
    NoSections(LessonId),

    #[error("lesson {lesson} question {index}: {source}")]
    InvalidQuestion {
        lesson: LessonId,
        index: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── UNIT ──────────────────────────────────────────────────────────────────────
//

/// A top-level curriculum grouping. Static for the lifetime of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub title: Localized<String>,
}

impl Unit {
    pub fn new(id: UnitId, title: Localized<String>) -> Self {
        Self { id, title }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonLevel {
    Basic,
    Advanced,
    /// Training-of-trainers material.
    #[serde(alias = "ToT")]
    Trainer,
}

impl LessonLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LessonLevel::Basic => "basic",
            LessonLevel::Advanced => "advanced",
            LessonLevel::Trainer => "trainer",
        }
    }
}

/// Practical follow-up exercise attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MiniTask {
    pub title: String,
    pub steps: Vec<String>,
    pub evidence: String,
}

/// A single teachable item: content sections, a scenario, a quiz and
/// reflection prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub unit_id: UnitId,
    pub level: LessonLevel,
    pub title: Localized<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration_min: u32,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    pub sections: Vec<String>,
    pub scenario: String,
    pub questions: Vec<Question>,
    #[serde(alias = "reflection")]
    pub reflection_prompts: Localized<Vec<String>>,
    #[serde(default)]
    pub mini_task: MiniTask,
}

impl Lesson {
    /// Checks the lesson's own invariants (unit membership is checked by the catalog).
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NoSections` when `sections` is empty and
    /// `LessonError::InvalidQuestion` for the first malformed question.
    pub fn validate(&self) -> Result<(), LessonError> {
        if self.sections.is_empty() {
            return Err(LessonError::NoSections(self.id.clone()));
        }
        for (index, question) in self.questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| LessonError::InvalidQuestion {
                    lesson: self.id.clone(),
                    index,
                    source,
                })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(sections: Vec<String>, questions: Vec<Question>) -> Lesson {
        Lesson {
            id: LessonId::new("U1L1"),
            unit_id: UnitId::new("U1"),
            level: LessonLevel::Basic,
            title: Localized::uniform("Intro"),
            category: "governance".into(),
            duration_min: 15,
            learning_outcomes: Vec::new(),
            sections,
            scenario: "A case".into(),
            questions,
            reflection_prompts: Localized::new(Vec::new(), Vec::new()),
            mini_task: MiniTask::default(),
        }
    }

    #[test]
    fn lesson_without_sections_is_invalid() {
        let err = lesson(Vec::new(), Vec::new()).validate().unwrap_err();
        assert!(matches!(err, LessonError::NoSections(_)));
    }

    #[test]
    fn lesson_reports_bad_question_index() {
        let bad = Question::TrueFalse {
            text: String::new(),
            correct_value: true,
            explanation: String::new(),
        };
        let good = Question::true_false("ok", true, "").unwrap();
        let err = lesson(vec!["s".into()], vec![good, bad])
            .validate()
            .unwrap_err();
        assert!(matches!(err, LessonError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn tot_level_alias_is_accepted() {
        let level: LessonLevel = serde_json::from_str("\"ToT\"").unwrap();
        assert_eq!(level, LessonLevel::Trainer);
    }
}
