use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::question::{Answer, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("incomplete answers: {answered} of {total} questions answered")]
    IncompleteAnswers { answered: usize, total: usize },

    #[error("question {index} does not exist (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("answer kind does not match question {index}")]
    AnswerMismatch { index: usize },

    #[error("option {option} does not exist for question {index}")]
    OptionOutOfRange { index: usize, option: usize },
}

//
// ─── ANSWER SET ────────────────────────────────────────────────────────────────
//

/// Answers collected during one lesson session, keyed by 0-based question index.
///
/// Never persisted; a new session always starts with an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswerSet {
    answers: BTreeMap<usize, Answer>,
}

impl QuizAnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for question `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the index is out of range, the answer kind does
    /// not match the question, or the chosen option does not exist.
    pub fn record(
        &mut self,
        questions: &[Question],
        index: usize,
        answer: Answer,
    ) -> Result<(), QuizError> {
        let question = questions.get(index).ok_or(QuizError::QuestionOutOfRange {
            index,
            total: questions.len(),
        })?;

        if !question.accepts(answer) {
            return Err(match answer {
                Answer::Choice(option) if matches!(question, Question::MultipleChoice { .. }) => {
                    QuizError::OptionOutOfRange { index, option }
                }
                _ => QuizError::AnswerMismatch { index },
            });
        }

        self.answers.insert(index, answer);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Answer> {
        self.answers.get(&index).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True when every question in `questions` has an answer.
    #[must_use]
    pub fn is_complete_for(&self, questions: &[Question]) -> bool {
        (0..questions.len()).all(|i| self.answers.contains_key(&i))
    }
}

//
// ─── SCORING ───────────────────────────────────────────────────────────────────
//

/// Per-question result shown after scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFeedback {
    pub index: usize,
    pub correct: bool,
    pub explanation: String,
}

/// Result of scoring a fully answered quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    pub feedback: Vec<QuestionFeedback>,
}

impl QuizOutcome {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

/// Scores `answers` against `questions`: one point per exactly correct answer.
///
/// # Errors
///
/// Returns `QuizError::IncompleteAnswers` unless every question is answered;
/// an empty answer set is rejected rather than scored as zero.
pub fn score(questions: &[Question], answers: &QuizAnswerSet) -> Result<QuizOutcome, QuizError> {
    if !answers.is_complete_for(questions) {
        return Err(QuizError::IncompleteAnswers {
            answered: answers.answered_count(),
            total: questions.len(),
        });
    }

    let feedback: Vec<QuestionFeedback> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionFeedback {
            index,
            correct: answers
                .get(index)
                .is_some_and(|answer| question.is_correct(answer)),
            explanation: question.explanation().to_owned(),
        })
        .collect();

    let score = feedback.iter().filter(|f| f.correct).count();

    Ok(QuizOutcome {
        score: u32::try_from(score).unwrap_or(u32::MAX),
        total: u32::try_from(questions.len()).unwrap_or(u32::MAX),
        feedback,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(correct: usize) -> Question {
        Question::multiple_choice(
            "mcq",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            "why",
        )
        .unwrap()
    }

    fn tf(correct: bool) -> Question {
        Question::true_false("tf", correct, "why").unwrap()
    }

    fn u1l1_questions() -> Vec<Question> {
        vec![mcq(1), mcq(1), tf(false)]
    }

    #[test]
    fn scenario_mixed_answers_score_two() {
        let questions = u1l1_questions();
        let mut answers = QuizAnswerSet::new();
        answers.record(&questions, 0, Answer::Choice(1)).unwrap();
        answers.record(&questions, 1, Answer::Choice(0)).unwrap();
        answers.record(&questions, 2, Answer::Truth(false)).unwrap();

        let outcome = score(&questions, &answers).unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 3);
        assert!(!outcome.feedback[1].correct);
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let questions = u1l1_questions();
        let mut answers = QuizAnswerSet::new();
        answers.record(&questions, 0, Answer::Choice(1)).unwrap();
        answers.record(&questions, 1, Answer::Choice(1)).unwrap();
        answers.record(&questions, 2, Answer::Truth(false)).unwrap();

        let outcome = score(&questions, &answers).unwrap();
        assert!(outcome.is_perfect());
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn empty_answers_are_rejected_not_zero() {
        let err = score(&u1l1_questions(), &QuizAnswerSet::new()).unwrap_err();
        assert_eq!(
            err,
            QuizError::IncompleteAnswers {
                answered: 0,
                total: 3
            }
        );
    }

    #[test]
    fn partial_answers_are_rejected() {
        let questions = u1l1_questions();
        let mut answers = QuizAnswerSet::new();
        answers.record(&questions, 0, Answer::Choice(1)).unwrap();
        answers.record(&questions, 2, Answer::Truth(false)).unwrap();

        let err = score(&questions, &answers).unwrap_err();
        assert!(matches!(
            err,
            QuizError::IncompleteAnswers {
                answered: 2,
                total: 3
            }
        ));
    }

    #[test]
    fn score_stays_within_bounds_for_every_answer_combination() {
        let questions = u1l1_questions();
        for first in 0..4 {
            for second in 0..4 {
                for third in [true, false] {
                    let mut answers = QuizAnswerSet::new();
                    answers.record(&questions, 0, Answer::Choice(first)).unwrap();
                    answers.record(&questions, 1, Answer::Choice(second)).unwrap();
                    answers.record(&questions, 2, Answer::Truth(third)).unwrap();
                    let outcome = score(&questions, &answers).unwrap();
                    assert!(outcome.score <= outcome.total);
                }
            }
        }
    }

    #[test]
    fn record_validates_index_and_shape() {
        let questions = u1l1_questions();
        let mut answers = QuizAnswerSet::new();

        assert_eq!(
            answers.record(&questions, 3, Answer::Truth(true)),
            Err(QuizError::QuestionOutOfRange { index: 3, total: 3 })
        );
        assert_eq!(
            answers.record(&questions, 2, Answer::Choice(0)),
            Err(QuizError::AnswerMismatch { index: 2 })
        );
        assert_eq!(
            answers.record(&questions, 0, Answer::Choice(9)),
            Err(QuizError::OptionOutOfRange {
                index: 0,
                option: 9
            })
        );
        assert!(answers.is_empty());
    }

    #[test]
    fn re_answering_replaces_previous_answer() {
        let questions = u1l1_questions();
        let mut answers = QuizAnswerSet::new();
        answers.record(&questions, 0, Answer::Choice(0)).unwrap();
        answers.record(&questions, 0, Answer::Choice(1)).unwrap();
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.get(0), Some(Answer::Choice(1)));
    }

    #[test]
    fn quiz_without_questions_scores_zero_of_zero() {
        let outcome = score(&[], &QuizAnswerSet::new()).unwrap();
        assert_eq!((outcome.score, outcome.total), (0, 0));
    }
}
