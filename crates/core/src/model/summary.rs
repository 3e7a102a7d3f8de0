use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score {score} exceeds total {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Final result of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    score: u32,
    total: u32,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(score: u32, total: u32) -> Result<Self, SummaryError> {
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self { score, total })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Rounded percentage of correct answers.
    ///
    /// The state machine never produces a zero total, but the division
    /// is guarded rather than left to panic: an empty quiz scores 0 %.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        u32::try_from((score * 100 + total / 2) / total).unwrap_or(100)
    }

    /// Tier message for the results screen, first match top-down.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.percentage() {
            100 => "Perfect!",
            80..=99 => "Awesome!",
            60..=79 => "Good Try!",
            _ => "Keep Practicing!",
        }
    }
}
