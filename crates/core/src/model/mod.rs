mod config;
mod question;
mod summary;

pub use config::{COUNT_CHOICES, ConfigError, QuizConfig, TABLE_CHOICES};
pub use question::Question;
pub use summary::{QuizSummary, SummaryError};
