mod quiz_vm;

pub use quiz_vm::{
    FeedbackVm, QuestionVm, QuizIntent, SummaryVm, map_feedback, map_question, map_summary,
    parse_answer,
};
