use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("multiple-choice question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz question with exactly one correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Question {
    #[serde(rename = "mcq")]
    MultipleChoice {
        text: String,
        options: Vec<String>,
        correct_index: usize,
        explanation: String,
    },
    #[serde(rename = "truefalse")]
    TrueFalse {
        text: String,
        #[serde(rename = "correct")]
        correct_value: bool,
        explanation: String,
    },
}

impl Question {
    /// Builds a validated multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, there are fewer than two
    /// options, or `correct_index` does not point at an option.
    pub fn multiple_choice(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = Self::MultipleChoice {
            text: text.into(),
            options,
            correct_index,
            explanation: explanation.into(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Builds a validated true/false question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank.
    pub fn true_false(
        text: impl Into<String>,
        correct_value: bool,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = Self::TrueFalse {
            text: text.into(),
            correct_value,
            explanation: explanation.into(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the structural invariants. Deserialized questions must pass
    /// through here before use.
    ///
    /// # Errors
    ///
    /// See [`Question::multiple_choice`].
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.text().trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if let Question::MultipleChoice {
            options,
            correct_index,
            ..
        } = self
        {
            if options.len() < 2 {
                return Err(QuestionError::TooFewOptions(options.len()));
            }
            if *correct_index >= options.len() {
                return Err(QuestionError::CorrectIndexOutOfRange {
                    index: *correct_index,
                    len: options.len(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { text, .. } | Question::TrueFalse { text, .. } => text,
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        match self {
            Question::MultipleChoice { explanation, .. }
            | Question::TrueFalse { explanation, .. } => explanation,
        }
    }

    /// Options for multiple-choice questions, empty for true/false.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Question::MultipleChoice { options, .. } => options,
            Question::TrueFalse { .. } => &[],
        }
    }

    /// Returns true when `answer` is the single correct answer.
    ///
    /// An answer of the wrong kind is never correct.
    #[must_use]
    pub fn is_correct(&self, answer: Answer) -> bool {
        match (self, answer) {
            (Question::MultipleChoice { correct_index, .. }, Answer::Choice(chosen)) => {
                chosen == *correct_index
            }
            (Question::TrueFalse { correct_value, .. }, Answer::Truth(value)) => {
                value == *correct_value
            }
            _ => false,
        }
    }

    /// Returns true when `answer` has the right shape for this question.
    #[must_use]
    pub fn accepts(&self, answer: Answer) -> bool {
        match (self, answer) {
            (Question::MultipleChoice { options, .. }, Answer::Choice(chosen)) => {
                chosen < options.len()
            }
            (Question::TrueFalse { .. }, Answer::Truth(_)) => true,
            _ => false,
        }
    }
}

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// A learner's selection for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Index of the selected option (multiple choice).
    Choice(usize),
    /// Selected truth value (true/false).
    Truth(bool),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn multiple_choice_requires_two_options() {
        let err = Question::multiple_choice("Q", options(1), 0, "e").unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions(1));
    }

    #[test]
    fn multiple_choice_rejects_out_of_range_index() {
        let err = Question::multiple_choice("Q", options(3), 3, "e").unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            Question::true_false("  ", true, "e").unwrap_err(),
            QuestionError::EmptyText
        );
    }

    #[test]
    fn correctness_matches_answer_kind() {
        let mcq = Question::multiple_choice("Q", options(4), 1, "e").unwrap();
        assert!(mcq.is_correct(Answer::Choice(1)));
        assert!(!mcq.is_correct(Answer::Choice(0)));
        assert!(!mcq.is_correct(Answer::Truth(true)));

        let tf = Question::true_false("Q", false, "e").unwrap();
        assert!(tf.is_correct(Answer::Truth(false)));
        assert!(!tf.is_correct(Answer::Truth(true)));
        assert!(!tf.is_correct(Answer::Choice(0)));
    }

    #[test]
    fn accepts_checks_shape_and_range() {
        let mcq = Question::multiple_choice("Q", options(2), 0, "e").unwrap();
        assert!(mcq.accepts(Answer::Choice(1)));
        assert!(!mcq.accepts(Answer::Choice(2)));
        assert!(!mcq.accepts(Answer::Truth(false)));
    }

    #[test]
    fn deserializes_stored_content_shape() {
        let json = r#"[
            {"type":"mcq","text":"Q1","options":["a","b"],"correct_index":1,"explanation":"x"},
            {"type":"truefalse","text":"Q2","correct":false,"explanation":"y"}
        ]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert!(questions[0].is_correct(Answer::Choice(1)));
        assert!(questions[1].is_correct(Answer::Truth(false)));
    }
}
