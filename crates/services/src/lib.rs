#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod sessions;

pub use error::{FlowError, SessionError};
pub use generator::{generate, generate_default};
pub use sessions::{
    AdvanceOutcome, AnswerFeedback, FlowAdvance, QuizFlow, QuizPhase, QuizSession, SessionProgress,
};
