mod flow;
mod progress;
mod session;

// Public API of the session subsystem.
pub use crate::error::{FlowError, SessionError};
pub use flow::{FlowAdvance, QuizFlow, QuizPhase};
pub use progress::SessionProgress;
pub use session::{AdvanceOutcome, AnswerFeedback, QuizSession};
