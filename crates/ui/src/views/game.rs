use dioxus::prelude::*;

use crate::vm::{FeedbackVm, QuestionVm, QuizIntent, parse_answer};

/// The playing screen: prompt, numeric input, and either the Check
/// button or the feedback line while the advance timer runs.
///
/// The answer input lives in a signal owned by the parent so the
/// advance transition can clear it along with the feedback.
#[component]
pub fn GameView(
    question: QuestionVm,
    score: u32,
    feedback: Option<FeedbackVm>,
    answer: Signal<String>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let mut answer = answer;
    let parsed = parse_answer(&answer.read());
    let can_check = parsed.is_some() && feedback.is_none();

    rsx! {
        div { class: "page game-page",
            header { class: "game-header",
                span { class: "game-progress", "Q {question.number}/{question.total}" }
                span { class: "game-score", "⭐ {score}" }
            }
            p { class: "game-prompt", "{question.prompt}" }
            input {
                class: "game-answer",
                id: "game-answer",
                placeholder: "?",
                inputmode: "numeric",
                autocomplete: "off",
                value: "{answer}",
                oninput: move |evt| answer.set(evt.value()),
            }
            if let Some(feedback) = feedback {
                p {
                    class: if feedback.correct {
                        "game-feedback game-feedback--correct"
                    } else {
                        "game-feedback game-feedback--wrong"
                    },
                    "{feedback.text()}"
                }
            } else {
                button {
                    class: "btn game-check",
                    id: "game-check",
                    r#type: "button",
                    disabled: !can_check,
                    onclick: move |_| {
                        if let Some(value) = parse_answer(&answer.read()) {
                            on_intent.call(QuizIntent::Answer(value));
                        }
                    },
                    "Check ✓"
                }
            }
        }
    }
}
