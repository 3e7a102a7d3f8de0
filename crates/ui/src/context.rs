use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::QuizConfig;
use services::QuizFlow;

/// How long feedback stays on screen before the quiz advances.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

pub trait UiApp: Send + Sync {
    fn initial_config(&self) -> QuizConfig;

    /// The flow presented when the UI mounts. Overridable so harnesses
    /// can start mid-session; the default starts at setup.
    fn initial_flow(&self) -> QuizFlow {
        QuizFlow::new(self.initial_config())
    }

    fn advance_delay(&self) -> Duration {
        DEFAULT_ADVANCE_DELAY
    }
}

#[derive(Clone)]
pub struct AppContext {
    initial_flow: QuizFlow,
    advance_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_flow: app.initial_flow(),
            advance_delay: app.advance_delay(),
        }
    }

    #[must_use]
    pub fn initial_flow(&self) -> QuizFlow {
        self.initial_flow.clone()
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
