use quiz_core::model::QuizConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{QuizFlow, QuizPhase};

use super::test_harness::setup_view_harness;

fn flow(max_table: u32, question_count: u32) -> QuizFlow {
    QuizFlow::new(QuizConfig::new(max_table, question_count).unwrap())
}

#[test]
fn setup_view_smoke_renders_options() {
    let mut harness = setup_view_harness(flow(5, 10));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("MathBuddy"), "missing title in {html}");
    assert!(
        html.contains("Practice up to:"),
        "missing table label in {html}"
    );
    assert!(
        html.contains("Number of Questions:"),
        "missing count label in {html}"
    );
    assert!(html.contains("Start Game"), "missing start button in {html}");
    assert!(
        html.contains("option-btn--selected"),
        "missing selected option in {html}"
    );
}

#[test]
fn game_view_smoke_renders_question_and_score() {
    // max_table 2 keeps the generated prompt deterministic: always 2 × 2.
    let mut playing = flow(2, 5);
    playing.start(&mut StdRng::seed_from_u64(1)).unwrap();

    let mut harness = setup_view_harness(playing);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Q 1/5"), "missing progress in {html}");
    assert!(html.contains("2 × 2"), "missing prompt in {html}");
    assert!(html.contains("⭐ 0"), "missing score in {html}");
    assert!(html.contains("Check"), "missing check button in {html}");
}

#[test]
fn game_view_smoke_renders_feedback_line() {
    let mut playing = flow(2, 5);
    playing.start(&mut StdRng::seed_from_u64(2)).unwrap();
    let feedback = playing.submit_answer(5).unwrap();
    assert!(!feedback.correct);

    let mut harness = setup_view_harness(playing);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("❌ Answer: 4"), "missing feedback in {html}");
    assert!(
        !html.contains("Check ✓"),
        "check button should be replaced by feedback in {html}"
    );
}

#[test]
fn results_view_smoke_renders_summary() {
    let mut finished = flow(2, 5);
    finished.start(&mut StdRng::seed_from_u64(3)).unwrap();
    while finished.phase() == QuizPhase::Playing {
        finished.submit_answer(4).unwrap();
        finished.advance();
    }

    let mut harness = setup_view_harness(finished);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Perfect!"), "missing message in {html}");
    assert!(html.contains("5/5"), "missing fraction in {html}");
    assert!(
        html.contains("Play Again"),
        "missing replay button in {html}"
    );
}
