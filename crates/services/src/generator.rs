use rand::Rng;

use quiz_core::model::{Question, QuizConfig};

/// Produce the question sequence for one session.
///
/// Each operand is sampled independently and uniformly from
/// `[2, max_table]`; repeated questions are allowed and expected. The
/// returned order is the presentation order and is never reshuffled.
///
/// The generator preconditions (`max_table >= 2`, `question_count >= 1`)
/// are unrepresentable here: `QuizConfig` rejects them at construction.
pub fn generate(config: &QuizConfig, rng: &mut impl Rng) -> Vec<Question> {
    (0..config.question_count())
        .map(|_| {
            let first = rng.random_range(2..=config.max_table());
            let second = rng.random_range(2..=config.max_table());
            Question::new(first, second)
        })
        .collect()
}

/// [`generate`] with the thread-local rng, for production call sites.
#[must_use]
pub fn generate_default(config: &QuizConfig) -> Vec<Question> {
    generate(config, &mut rand::rng())
}
