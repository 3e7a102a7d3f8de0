use quiz_core::model::{Question, QuizSummary};

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// The answer the question expected, shown when the guess was wrong.
    pub expected: u64,
}

/// Result of an advance out of the feedback sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the next question.
    Continue,
    /// The last question was answered; the session is complete.
    Finished,
}

/// In-memory state for one run through a question sequence.
///
/// Questions are answered strictly in order. Each one is answered
/// exactly once (`submit_answer`), sits in the feedback sub-state until
/// `advance`, and the session completes when the last question is
/// advanced past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    feedback: Option<AnswerFeedback>,
    completed: bool,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            score: 0,
            feedback: None,
            completed: false,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based position of the question currently on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    /// True while an answer has been evaluated but not yet advanced past.
    #[must_use]
    pub fn awaiting_advance(&self) -> bool {
        self.feedback.is_some()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = if self.completed {
            self.total()
        } else {
            self.current + usize::from(self.feedback.is_some())
        };
        SessionProgress {
            total: self.total(),
            answered,
            remaining: self.total() - answered,
            score: self.score,
            is_complete: self.completed,
        }
    }

    /// Evaluate an answer against the current question.
    ///
    /// A correct answer increments the score by exactly one; any other
    /// value leaves it unchanged. Either way the session enters the
    /// feedback sub-state until [`advance`](Self::advance) is called.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session has finished
    /// and `SessionError::FeedbackPending` if the current question was
    /// already answered.
    pub fn submit_answer(&mut self, value: i64) -> Result<AnswerFeedback, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        if self.feedback.is_some() {
            return Err(SessionError::FeedbackPending);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };

        let feedback = AnswerFeedback {
            correct: question.is_correct(value),
            expected: question.answer(),
        };
        if feedback.correct {
            self.score += 1;
        }
        self.feedback = Some(feedback);

        Ok(feedback)
    }

    /// Leave the feedback sub-state: step to the next question, or
    /// complete the session if the current question was the last.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingAdvance` when no answer has
    /// been submitted for the current question.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.feedback.take().is_none() {
            return Err(SessionError::NotAwaitingAdvance);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(AdvanceOutcome::Continue)
        } else {
            self.completed = true;
            Ok(AdvanceOutcome::Finished)
        }
    }

    /// Final score summary.
    ///
    /// # Errors
    ///
    /// Returns a `SummaryError` via `SessionError::Summary` if the
    /// score/total invariant was somehow violated; the machine itself
    /// never produces that state.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(QuizSummary::new(self.score, total)?)
    }
}
