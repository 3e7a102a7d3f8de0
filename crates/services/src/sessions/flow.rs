use rand::Rng;

use quiz_core::model::{QuizConfig, QuizSummary};

use super::session::{AdvanceOutcome, AnswerFeedback, QuizSession};
use crate::error::FlowError;
use crate::generator;

/// The three mutually exclusive phases of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Setup,
    Playing,
    Results,
}

/// What a call to [`QuizFlow::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAdvance {
    /// Stepped to the next question.
    Continue,
    /// Completed the session and moved to results.
    Finished,
    /// Nothing was awaiting advance; the call was a no-op.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FlowState {
    Setup,
    Playing(QuizSession),
    Results(QuizSummary),
}

/// The quiz state machine: Setup → Playing → Results → Setup.
///
/// All session state lives inside this one value; transitions are the
/// methods below, everything else observes through the read accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFlow {
    config: QuizConfig,
    state: FlowState,
    generation: u64,
}

impl QuizFlow {
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            state: FlowState::Setup,
            generation: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.state {
            FlowState::Setup => QuizPhase::Setup,
            FlowState::Playing(_) => QuizPhase::Playing,
            FlowState::Results(_) => QuizPhase::Results,
        }
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// Token for deferred tasks: bumped by every `start` and
    /// `play_again`, so a timer scheduled against an old session can
    /// detect that its session is gone.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            FlowState::Playing(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        match &self.state {
            FlowState::Results(summary) => Some(summary),
            _ => None,
        }
    }

    /// Replace the difficulty bound. Only legal during setup; the
    /// config is read-only once playing begins.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotInSetup` outside setup and propagates
    /// config validation failures.
    pub fn set_max_table(&mut self, max_table: u32) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::Setup) {
            return Err(FlowError::NotInSetup);
        }
        self.config = self.config.with_max_table(max_table)?;
        Ok(())
    }

    /// Replace the question count. Only legal during setup.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotInSetup` outside setup and propagates
    /// config validation failures.
    pub fn set_question_count(&mut self, question_count: u32) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::Setup) {
            return Err(FlowError::NotInSetup);
        }
        self.config = self.config.with_question_count(question_count)?;
        Ok(())
    }

    /// Leave setup: generate the question sequence and enter playing
    /// with a fresh score and position.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotInSetup` outside setup.
    pub fn start(&mut self, rng: &mut impl Rng) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::Setup) {
            return Err(FlowError::NotInSetup);
        }

        let questions = generator::generate(&self.config, rng);
        let session = QuizSession::new(questions).map_err(FlowError::Session)?;
        self.state = FlowState::Playing(session);
        self.generation += 1;
        Ok(())
    }

    /// [`start`](Self::start) with the thread-local rng.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotInSetup` outside setup.
    pub fn start_default(&mut self) -> Result<(), FlowError> {
        self.start(&mut rand::rng())
    }

    /// Evaluate an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotPlaying` outside the playing phase and
    /// propagates session errors (completed, double submit).
    pub fn submit_answer(&mut self, value: i64) -> Result<AnswerFeedback, FlowError> {
        match &mut self.state {
            FlowState::Playing(session) => Ok(session.submit_answer(value)?),
            _ => Err(FlowError::NotPlaying),
        }
    }

    /// Leave the feedback sub-state, moving to the next question or to
    /// results.
    ///
    /// Total and idempotent: the advance timer may fire late, after a
    /// reset or teardown, and must observe a no-op rather than mutate a
    /// discarded session.
    pub fn advance(&mut self) -> FlowAdvance {
        let FlowState::Playing(session) = &mut self.state else {
            return FlowAdvance::Ignored;
        };

        match session.advance() {
            Ok(AdvanceOutcome::Continue) => FlowAdvance::Continue,
            Ok(AdvanceOutcome::Finished) => match session.summary() {
                Ok(summary) => {
                    self.state = FlowState::Results(summary);
                    FlowAdvance::Finished
                }
                // score <= total is a machine invariant; a violation is
                // treated as a no-op rather than a panic.
                Err(_) => FlowAdvance::Ignored,
            },
            Err(_) => FlowAdvance::Ignored,
        }
    }

    /// Discard any session data and return to setup, keeping the
    /// config. Score and position are reinitialized by the next
    /// [`start`](Self::start).
    pub fn play_again(&mut self) {
        self.state = FlowState::Setup;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flow(max_table: u32, question_count: u32) -> QuizFlow {
        QuizFlow::new(QuizConfig::new(max_table, question_count).unwrap())
    }

    fn started(max_table: u32, question_count: u32) -> QuizFlow {
        let mut flow = flow(max_table, question_count);
        flow.start(&mut StdRng::seed_from_u64(1)).unwrap();
        flow
    }

    fn answer_current(flow: &mut QuizFlow, correct: bool) {
        let expected = flow
            .session()
            .and_then(QuizSession::current_question)
            .map(Question::answer)
            .unwrap();
        let value = if correct {
            i64::try_from(expected).unwrap()
        } else {
            i64::try_from(expected).unwrap() + 1
        };
        flow.submit_answer(value).unwrap();
    }

    #[test]
    fn new_flow_starts_in_setup() {
        let flow = flow(5, 10);
        assert_eq!(flow.phase(), QuizPhase::Setup);
        assert!(flow.session().is_none());
        assert!(flow.summary().is_none());
    }

    #[test]
    fn start_generates_questions_and_enters_playing() {
        let flow = started(5, 5);
        assert_eq!(flow.phase(), QuizPhase::Playing);

        let session = flow.session().unwrap();
        assert_eq!(session.total(), 5);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        for question in session.questions() {
            assert!((2..=5).contains(&question.first()));
            assert!((2..=5).contains(&question.second()));
        }
    }

    #[test]
    fn config_is_read_only_outside_setup() {
        let mut flow = started(5, 5);
        assert_eq!(flow.set_max_table(10).unwrap_err(), FlowError::NotInSetup);
        assert_eq!(
            flow.set_question_count(20).unwrap_err(),
            FlowError::NotInSetup
        );
        assert_eq!(flow.config().max_table(), 5);
    }

    #[test]
    fn config_edits_in_setup_are_validated() {
        let mut flow = flow(5, 10);
        flow.set_max_table(10).unwrap();
        flow.set_question_count(20).unwrap();
        assert_eq!(flow.config().max_table(), 10);
        assert_eq!(flow.config().question_count(), 20);

        assert!(matches!(
            flow.set_max_table(1),
            Err(FlowError::Config(_))
        ));
    }

    #[test]
    fn start_outside_setup_is_rejected() {
        let mut flow = started(5, 5);
        assert_eq!(
            flow.start(&mut StdRng::seed_from_u64(2)).unwrap_err(),
            FlowError::NotInSetup
        );
    }

    #[test]
    fn submit_outside_playing_is_rejected() {
        let mut flow = flow(5, 5);
        assert_eq!(flow.submit_answer(4).unwrap_err(), FlowError::NotPlaying);
    }

    #[test]
    fn full_run_reaches_results() {
        let mut flow = started(5, 3);

        for _ in 0..2 {
            answer_current(&mut flow, true);
            assert_eq!(flow.advance(), FlowAdvance::Continue);
        }
        answer_current(&mut flow, true);
        assert_eq!(flow.advance(), FlowAdvance::Finished);

        assert_eq!(flow.phase(), QuizPhase::Results);
        let summary = flow.summary().unwrap();
        assert_eq!(summary.score(), 3);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.message(), "Perfect!");
    }

    #[test]
    fn advance_is_a_noop_outside_feedback() {
        let mut flow = flow(5, 5);
        assert_eq!(flow.advance(), FlowAdvance::Ignored);

        flow.start(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(flow.advance(), FlowAdvance::Ignored);
    }

    #[test]
    fn stale_advance_after_reset_is_ignored() {
        let mut flow = started(5, 2);
        answer_current(&mut flow, true);

        // A deferred advance captures the generation at schedule time.
        let scheduled_generation = flow.generation();
        flow.play_again();

        assert_ne!(flow.generation(), scheduled_generation);
        assert_eq!(flow.advance(), FlowAdvance::Ignored);
        assert_eq!(flow.phase(), QuizPhase::Setup);
    }

    #[test]
    fn play_again_returns_to_setup_and_next_start_reinitializes() {
        let mut flow = started(5, 2);
        answer_current(&mut flow, true);
        flow.advance();
        answer_current(&mut flow, false);
        flow.advance();
        assert_eq!(flow.phase(), QuizPhase::Results);

        flow.play_again();
        assert_eq!(flow.phase(), QuizPhase::Setup);
        assert!(flow.session().is_none());
        assert!(flow.summary().is_none());

        flow.start(&mut StdRng::seed_from_u64(4)).unwrap();
        let session = flow.session().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn generation_changes_on_every_start_and_reset() {
        let mut flow = flow(5, 2);
        let g0 = flow.generation();
        flow.start(&mut StdRng::seed_from_u64(5)).unwrap();
        let g1 = flow.generation();
        flow.play_again();
        let g2 = flow.generation();

        assert_ne!(g0, g1);
        assert_ne!(g1, g2);
    }
}
