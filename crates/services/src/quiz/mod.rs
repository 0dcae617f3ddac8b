mod config;
mod machine;
mod phase;
mod snapshot;
mod ticket;

pub use config::{DEFAULT_ADVANCE_DELAY, QuizConfig};
pub use machine::{AnswerOutcome, QuizMachine};
pub use phase::{QuizAction, QuizPhase};
pub use snapshot::QuizSnapshot;
pub use ticket::{AdvanceOutcome, AdvanceTicket, SessionVersion};
