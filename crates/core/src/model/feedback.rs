use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("feedback message cannot be empty")]
    EmptyMessage,
}

/// A piece of citizen feedback, optionally anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub category: String,
    pub message: String,
    pub is_anonymous: bool,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub category: String,
    pub message: String,
    pub is_anonymous: bool,
}

impl Default for FeedbackDraft {
    fn default() -> Self {
        Self {
            category: "governance".to_string(),
            message: String::new(),
            is_anonymous: true,
        }
    }
}

impl FeedbackDraft {
    /// # Errors
    ///
    /// Returns `FeedbackError::EmptyMessage` if the message is blank.
    pub fn validate(self, now: DateTime<Utc>) -> Result<Feedback, FeedbackError> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        let category = self.category.trim();
        Ok(Feedback {
            id: Uuid::new_v4(),
            category: if category.is_empty() {
                "general".to_string()
            } else {
                category.to_string()
            },
            message: message.to_string(),
            is_anonymous: self.is_anonymous,
            date: now,
        })
    }
}
