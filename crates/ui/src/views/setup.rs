use dioxus::prelude::*;

use quiz_core::model::{COUNT_CHOICES, QuizConfig, TABLE_CHOICES};

use crate::vm::QuizIntent;

/// The configuration screen shown before a quiz starts.
#[component]
pub fn SetupView(config: QuizConfig, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "page setup-page",
            header { class: "setup-header",
                h1 { class: "setup-title", "MathBuddy" }
                p { class: "setup-subtitle", "Train your brain with multiplication!" }
            }
            div { class: "setup-card",
                div { class: "setup-options",
                    p { class: "setup-label", "Practice up to:" }
                    div { class: "option-row",
                        for choice in TABLE_CHOICES {
                            OptionButton {
                                key: "{choice}",
                                value: choice,
                                selected: config.max_table() == choice,
                                kind: OptionKind::Table,
                                on_intent: on_intent,
                            }
                        }
                    }
                }
                div { class: "setup-options",
                    p { class: "setup-label", "Number of Questions:" }
                    div { class: "option-row",
                        for choice in COUNT_CHOICES {
                            OptionButton {
                                key: "{choice}",
                                value: choice,
                                selected: config.question_count() == choice,
                                kind: OptionKind::Count,
                                on_intent: on_intent,
                            }
                        }
                    }
                }
                button {
                    class: "btn setup-start",
                    id: "setup-start",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Start),
                    "Start Game ▶"
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OptionKind {
    Table,
    Count,
}

#[component]
fn OptionButton(
    value: u32,
    selected: bool,
    kind: OptionKind,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "option-btn option-btn--selected"
    } else {
        "option-btn"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| {
                let intent = match kind {
                    OptionKind::Table => QuizIntent::ChooseTable(value),
                    OptionKind::Count => QuizIntent::ChooseCount(value),
                };
                on_intent.call(intent);
            },
            "{value}"
        }
    }
}
