use quiz_core::model::QuizSummary;
use services::{AnswerFeedback, QuizSession};

/// User intents flowing from the views into the quiz state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ChooseTable(u32),
    ChooseCount(u32),
    Start,
    Answer(i64),
    PlayAgain,
}

/// Parse free-form answer input.
///
/// Returns `None` for anything that is not a plain integer; the Check
/// action stays disabled in that case rather than reporting an error.
#[must_use]
pub fn parse_answer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Display data for the question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    /// 1-based position for the `Q n/total` header.
    pub number: usize,
    pub total: usize,
}

#[must_use]
pub fn map_question(session: &QuizSession) -> Option<QuestionVm> {
    session.current_question().map(|question| QuestionVm {
        prompt: question.prompt(),
        number: session.current_index() + 1,
        total: session.total(),
    })
}

/// Display data for the feedback line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub expected: u64,
}

impl FeedbackVm {
    /// The line shown in place of the Check button.
    #[must_use]
    pub fn text(&self) -> String {
        if self.correct {
            "✅ Correct!".to_string()
        } else {
            format!("❌ Answer: {}", self.expected)
        }
    }
}

#[must_use]
pub fn map_feedback(feedback: &AnswerFeedback) -> FeedbackVm {
    FeedbackVm {
        correct: feedback.correct,
        expected: feedback.expected,
    }
}

/// Display data for the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub fraction: String,
    pub message: &'static str,
}

#[must_use]
pub fn map_summary(summary: &QuizSummary) -> SummaryVm {
    SummaryVm {
        fraction: format!("{}/{}", summary.score(), summary.total()),
        message: summary.message(),
    }
}
