mod instructions;
mod question;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use instructions::InstructionsView;
pub use question::QuestionView;
pub use results::ResultsView;
pub use state::{ViewError, view_error_from};
