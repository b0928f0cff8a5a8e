//! Reference library of civic manuals, guides and templates.

mod builtin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Language, Localized};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("library item not found: {0}")]
    ItemNotFound(String),

    #[error("library item {item} has no section {section}")]
    SectionNotFound { item: String, section: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    Manual,
    Guide,
    Template,
}

impl LibraryKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LibraryKind::Manual => "manual",
            LibraryKind::Guide => "guide",
            LibraryKind::Template => "template",
        }
    }
}

/// One reference document, split into sections for reading and explaining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LibraryKind,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub content: Localized<Vec<String>>,
}

impl LibraryItem {
    /// # Errors
    ///
    /// Returns `LibraryError::SectionNotFound` when `index` (0-based) is past
    /// the last section in `language`.
    pub fn section(&self, index: usize, language: Language) -> Result<&str, LibraryError> {
        self.content
            .get(language)
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| LibraryError::SectionNotFound {
                item: self.id.clone(),
                section: index,
            })
    }
}

#[derive(Debug, Clone)]
pub struct Library {
    items: Vec<LibraryItem>,
}

impl Library {
    /// The reference documents shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: builtin::items(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    /// # Errors
    ///
    /// Returns `LibraryError::ItemNotFound` for an unknown id.
    pub fn get(&self, id: &str) -> Result<&LibraryItem, LibraryError> {
        let id = id.trim();
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| LibraryError::ItemNotFound(id.to_string()))
    }
}
