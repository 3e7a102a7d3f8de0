//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ConfigError, SummaryError};

/// Errors emitted by the playing-phase session machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("an answer is already awaiting advance")]
    FeedbackPending,
    #[error("no answer has been submitted for the current question")]
    NotAwaitingAdvance,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Errors emitted by the quiz flow state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("operation is only valid during setup")]
    NotInSetup,
    #[error("operation is only valid while playing")]
    NotPlaying,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
