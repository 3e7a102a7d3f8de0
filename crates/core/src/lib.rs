#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    COUNT_CHOICES, ConfigError, Question, QuizConfig, QuizSummary, SummaryError, TABLE_CHOICES,
};
