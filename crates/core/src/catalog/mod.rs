//! Read-only lesson catalog.
//!
//! Units and lessons keep their insertion order; that order is the one used
//! for unit progress denominators and for listing.

mod builtin;

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Lesson, LessonError, LessonId, Unit, UnitId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("lesson not found: {0}")]
    LessonNotFound(LessonId),

    #[error("duplicate unit id: {0}")]
    DuplicateUnit(UnitId),

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(LessonId),

    #[error("lesson {lesson} references unknown unit {unit}")]
    UnknownUnit { lesson: LessonId, unit: UnitId },

    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
    lessons: Vec<Lesson>,
    unit_index: HashMap<UnitId, usize>,
    lesson_index: HashMap<LessonId, usize>,
}

#[derive(Deserialize)]
struct CatalogFile {
    units: Vec<Unit>,
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Build a catalog, checking every unit/lesson invariant up front.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for duplicate ids, lessons pointing at unknown
    /// units, lessons without sections, or malformed questions.
    pub fn new(units: Vec<Unit>, lessons: Vec<Lesson>) -> Result<Self, CatalogError> {
        let mut unit_index = HashMap::with_capacity(units.len());
        for (pos, unit) in units.iter().enumerate() {
            if unit_index.insert(unit.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateUnit(unit.id.clone()));
            }
        }

        let mut lesson_index = HashMap::with_capacity(lessons.len());
        for (pos, lesson) in lessons.iter().enumerate() {
            if !unit_index.contains_key(&lesson.unit_id) {
                return Err(CatalogError::UnknownUnit {
                    lesson: lesson.id.clone(),
                    unit: lesson.unit_id.clone(),
                });
            }
            lesson.validate()?;
            if lesson_index.insert(lesson.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateLesson(lesson.id.clone()));
            }
        }

        Ok(Self {
            units,
            lessons,
            unit_index,
            lesson_index,
        })
    }

    /// Parse a catalog from a JSON document `{ "units": [...], "lessons": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed JSON and any validation
    /// error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.units, file.lessons)
    }

    /// The default civic-education curriculum shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnitNotFound` for an unknown id.
    pub fn get_unit(&self, unit_id: &UnitId) -> Result<&Unit, CatalogError> {
        self.unit_index
            .get(unit_id)
            .map(|&pos| &self.units[pos])
            .ok_or_else(|| CatalogError::UnitNotFound(unit_id.clone()))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::LessonNotFound` for an unknown id.
    pub fn get_lesson(&self, lesson_id: &LessonId) -> Result<&Lesson, CatalogError> {
        self.lesson_index
            .get(lesson_id)
            .map(|&pos| &self.lessons[pos])
            .ok_or_else(|| CatalogError::LessonNotFound(lesson_id.clone()))
    }

    /// Lessons of a unit in catalog order. Empty for unknown units.
    #[must_use]
    pub fn get_lessons_for_unit(&self, unit_id: &UnitId) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|lesson| &lesson.unit_id == unit_id)
            .collect()
    }
}
