use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::model::locale::{Language, Localized};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeetingError {
    #[error("decision {0} has no text")]
    EmptyDecision(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub text: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: DecisionStatus,
}

/// A recorded community meeting with its agenda and decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub agenda: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<Decision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionDraft {
    pub text: String,
    pub owner: String,
    pub deadline: Option<String>,
    pub status: Option<DecisionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub title: String,
    pub attendees: Vec<String>,
    pub agenda: Vec<String>,
    pub decisions: Vec<DecisionDraft>,
}

fn untitled() -> Localized<String> {
    Localized::new("اجتماع بدون عنوان".to_string(), "Untitled meeting".to_string())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

impl MeetingDraft {
    /// Normalize the draft into a meeting dated `now`.
    ///
    /// A blank title becomes the localized "untitled" label; decisions
    /// without an explicit status start as pending.
    ///
    /// # Errors
    ///
    /// Returns `MeetingError::EmptyDecision` if a decision has no text.
    pub fn validate(self, now: DateTime<Utc>, language: Language) -> Result<Meeting, MeetingError> {
        let title = self.title.trim();
        let title = if title.is_empty() {
            untitled().get(language).clone()
        } else {
            title.to_string()
        };

        let decisions = self
            .decisions
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                let text = draft.text.trim().to_string();
                if text.is_empty() {
                    return Err(MeetingError::EmptyDecision(index));
                }
                Ok(Decision {
                    text,
                    owner: draft.owner.trim().to_string(),
                    deadline: draft
                        .deadline
                        .map(|d| d.trim().to_string())
                        .filter(|d| !d.is_empty()),
                    status: draft.status.unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Meeting {
            id: Uuid::new_v4(),
            title,
            date: now,
            attendees: clean_list(self.attendees),
            agenda: clean_list(self.agenda),
            decisions,
        })
    }
}
