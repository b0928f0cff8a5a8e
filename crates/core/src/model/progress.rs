use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{LessonId, UnitId};
use crate::model::lesson::Lesson;

//
// ─── LESSON PROGRESS ───────────────────────────────────────────────────────────
//

/// Durable per-lesson record. Every field falls back to its default when
/// missing from stored data, so partially written records still decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonProgress {
    pub completed: bool,
    pub reflection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_score: Option<u32>,
}

/// All progress records, keyed by lesson.
pub type ProgressMap = BTreeMap<LessonId, LessonProgress>;

/// Partial update merged into a `LessonProgress`. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressUpdate {
    pub completed: Option<bool>,
    pub reflection: Option<String>,
    pub quiz_score: Option<u32>,
}

impl ProgressUpdate {
    #[must_use]
    pub fn reflection(text: impl Into<String>) -> Self {
        Self {
            reflection: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn completed() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quiz_score(mut self, score: u32) -> Self {
        self.quiz_score = Some(score);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_none() && self.reflection.is_none() && self.quiz_score.is_none()
    }
}

impl LessonProgress {
    /// Merges `update` into this record.
    pub fn apply(&mut self, update: ProgressUpdate) {
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(reflection) = update.reflection {
            self.reflection = reflection;
        }
        if let Some(score) = update.quiz_score {
            self.quiz_score = Some(score);
        }
    }
}

/// Merges `update` into the record for `lesson_id`, creating a default record first if needed.
pub fn apply_update(progress: &mut ProgressMap, lesson_id: &LessonId, update: ProgressUpdate) {
    progress
        .entry(lesson_id.clone())
        .or_default()
        .apply(update);
}

//
// ─── SUMMARIES ─────────────────────────────────────────────────────────────────
//

/// Derived completion figures for one unit. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitProgressSummary {
    pub unit_id: UnitId,
    pub completed_count: u32,
    pub total_count: u32,
    pub percent: f64,
}

/// Derived completion figures across the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallProgress {
    pub completed_count: u32,
    pub total_count: u32,
    pub percent: f64,
}

fn percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

fn count<'a>(progress: &ProgressMap, lessons: impl IntoIterator<Item = &'a Lesson>) -> (u32, u32) {
    let mut completed = 0_u32;
    let mut total = 0_u32;
    for lesson in lessons {
        total = total.saturating_add(1);
        if progress.get(&lesson.id).is_some_and(|p| p.completed) {
            completed = completed.saturating_add(1);
        }
    }
    (completed, total)
}

/// Summarizes `lessons_of_unit` against `progress`. Pure; `percent` is 0 for an empty unit.
#[must_use]
pub fn summarize_unit(
    progress: &ProgressMap,
    unit_id: &UnitId,
    lessons_of_unit: &[&Lesson],
) -> UnitProgressSummary {
    let (completed_count, total_count) = count(progress, lessons_of_unit.iter().copied());
    UnitProgressSummary {
        unit_id: unit_id.clone(),
        completed_count,
        total_count,
        percent: percent(completed_count, total_count),
    }
}

/// Summarizes every lesson in `lessons`. Records for lessons outside the list are ignored.
#[must_use]
pub fn summarize_overall<'a>(
    progress: &ProgressMap,
    lessons: impl IntoIterator<Item = &'a Lesson>,
) -> OverallProgress {
    let (completed_count, total_count) = count(progress, lessons);
    OverallProgress {
        completed_count,
        total_count,
        percent: percent(completed_count, total_count),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
