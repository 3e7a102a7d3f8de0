use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuizConfig;
use services::QuizFlow;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

struct TestApp {
    flow: QuizFlow,
}

impl UiApp for TestApp {
    fn initial_config(&self) -> QuizConfig {
        self.flow.config()
    }

    fn initial_flow(&self) -> QuizFlow {
        self.flow.clone()
    }

    fn advance_delay(&self) -> Duration {
        Duration::from_millis(1)
    }
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    flow: QuizFlow,
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        flow: props.flow.clone(),
    });
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `QuizView` over a pre-built flow, so smoke tests can start in
/// any phase without driving the UI there.
pub fn setup_view_harness(flow: QuizFlow) -> ViewHarness {
    let dom = VirtualDom::new_with_props(Harness, HarnessProps { flow });
    ViewHarness { dom }
}
