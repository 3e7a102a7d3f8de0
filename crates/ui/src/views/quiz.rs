use dioxus::prelude::*;

use services::{QuizPhase, QuizSession};

use super::{GameView, ResultsView, SetupView};
use crate::context::AppContext;
use crate::vm::{QuizIntent, map_feedback, map_question, map_summary};

/// Renders the view for the current phase and owns the one mutable
/// `QuizFlow` value plus the pending advance timer.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let advance_delay = ctx.advance_delay();
    let mut flow = use_signal(move || ctx.initial_flow());
    let mut answer_input = use_signal(String::new);
    let mut pending_advance = use_signal(|| None::<Task>);

    // A timer that outlives this view must never touch the flow.
    use_drop(move || {
        if let Some(task) = pending_advance.write().take() {
            task.cancel();
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::ChooseTable(value) => {
            let _ = flow.write().set_max_table(value);
        }
        QuizIntent::ChooseCount(value) => {
            let _ = flow.write().set_question_count(value);
        }
        QuizIntent::Start => {
            answer_input.set(String::new());
            let _ = flow.write().start_default();
        }
        QuizIntent::Answer(value) => {
            if flow.write().submit_answer(value).is_err() {
                return;
            }
            let generation = flow.peek().generation();

            // Replace, never stack: one pending advance at a time.
            if let Some(task) = pending_advance.write().take() {
                task.cancel();
            }
            let task = spawn(async move {
                tokio::time::sleep(advance_delay).await;
                {
                    let mut flow = flow.write();
                    if flow.generation() != generation {
                        return;
                    }
                    flow.advance();
                }
                answer_input.set(String::new());
            });
            pending_advance.set(Some(task));
        }
        QuizIntent::PlayAgain => {
            if let Some(task) = pending_advance.write().take() {
                task.cancel();
            }
            answer_input.set(String::new());
            flow.write().play_again();
        }
    });

    let flow_read = flow.read();
    let body = match flow_read.phase() {
        QuizPhase::Setup => rsx! {
            SetupView { config: flow_read.config(), on_intent: dispatch }
        },
        QuizPhase::Playing => {
            let session = flow_read.session();
            let question = session.and_then(map_question);
            let feedback = session.and_then(|s| s.feedback().map(map_feedback));
            let score = session.map_or(0, QuizSession::score);
            rsx! {
                if let Some(question) = question {
                    GameView {
                        question,
                        score,
                        feedback,
                        answer: answer_input,
                        on_intent: dispatch,
                    }
                }
            }
        }
        QuizPhase::Results => {
            let summary = flow_read.summary().map(map_summary);
            rsx! {
                if let Some(summary) = summary {
                    ResultsView { summary, on_intent: dispatch }
                }
            }
        }
    };

    rsx! {
        div { class: "quiz-screen", {body} }
    }
}
