use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty options offered by the setup screen.
pub const TABLE_CHOICES: [u32; 3] = [2, 5, 10];

/// Session length options offered by the setup screen.
pub const COUNT_CHOICES: [u32; 3] = [5, 10, 20];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max table must be at least 2, got {0}")]
    MaxTableTooSmall(u32),

    #[error("question count must be at least 1")]
    NoQuestions,
}

/// Session configuration chosen during setup.
///
/// Both bounds are validated at construction, so downstream code can
/// rely on `max_table >= 2` and `question_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    max_table: u32,
    question_count: u32,
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::MaxTableTooSmall` if `max_table < 2` and
    /// `ConfigError::NoQuestions` if `question_count` is zero.
    pub fn new(max_table: u32, question_count: u32) -> Result<Self, ConfigError> {
        if max_table < 2 {
            return Err(ConfigError::MaxTableTooSmall(max_table));
        }
        if question_count == 0 {
            return Err(ConfigError::NoQuestions);
        }

        Ok(Self {
            max_table,
            question_count,
        })
    }

    /// Inclusive upper bound for both operands.
    #[must_use]
    pub fn max_table(&self) -> u32 {
        self.max_table
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Replace the difficulty bound, keeping the question count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MaxTableTooSmall` for a bound below 2.
    pub fn with_max_table(self, max_table: u32) -> Result<Self, ConfigError> {
        Self::new(max_table, self.question_count)
    }

    /// Replace the question count, keeping the difficulty bound.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoQuestions` for a zero count.
    pub fn with_question_count(self, question_count: u32) -> Result<Self, ConfigError> {
        Self::new(self.max_table, question_count)
    }
}

impl Default for QuizConfig {
    /// The selection the setup screen starts from: tables up to 5, ten
    /// questions.
    fn default() -> Self {
        Self {
            max_table: 5,
            question_count: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_bounds() {
        let config = QuizConfig::new(10, 20).unwrap();
        assert_eq!(config.max_table(), 10);
        assert_eq!(config.question_count(), 20);
    }

    #[test]
    fn rejects_max_table_below_two() {
        assert_eq!(
            QuizConfig::new(1, 5).unwrap_err(),
            ConfigError::MaxTableTooSmall(1)
        );
        assert_eq!(
            QuizConfig::new(0, 5).unwrap_err(),
            ConfigError::MaxTableTooSmall(0)
        );
    }

    #[test]
    fn rejects_zero_question_count() {
        assert_eq!(QuizConfig::new(5, 0).unwrap_err(), ConfigError::NoQuestions);
    }

    #[test]
    fn default_matches_initial_selection() {
        let config = QuizConfig::default();
        assert_eq!(config.max_table(), 5);
        assert_eq!(config.question_count(), 10);
    }

    #[test]
    fn offered_choices_are_valid_configs() {
        for table in TABLE_CHOICES {
            for count in COUNT_CHOICES {
                assert!(QuizConfig::new(table, count).is_ok());
            }
        }
    }

    #[test]
    fn with_helpers_revalidate() {
        let config = QuizConfig::default();
        assert_eq!(config.with_max_table(2).unwrap().max_table(), 2);
        assert!(config.with_max_table(1).is_err());
        assert_eq!(
            config.with_question_count(20).unwrap().question_count(),
            20
        );
        assert!(config.with_question_count(0).is_err());
    }
}
