mod game;
mod quiz;
mod results;
mod setup;

pub use game::GameView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use setup::SetupView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
