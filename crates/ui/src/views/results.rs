use dioxus::prelude::*;

use crate::vm::{QuizIntent, SummaryVm};

/// Final screen: tier message, score fraction, and the replay button.
#[component]
pub fn ResultsView(summary: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "page results-page",
            span { class: "results-trophy", "🏆" }
            h2 { class: "results-message", "{summary.message}" }
            p { class: "results-fraction", "{summary.fraction}" }
            button {
                class: "btn results-again",
                id: "results-again",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::PlayAgain),
                "Play Again 🔁"
            }
        }
    }
}
