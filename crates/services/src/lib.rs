#![forbid(unsafe_code)]

pub mod auto_advance;
pub mod error;
pub mod playback;
pub mod question;
pub mod quiz;
pub mod quiz_loop;
pub mod shuffle;

pub use quiz_core::Clock;

pub use auto_advance::AutoAdvance;
pub use error::{PlaybackError, QuestionError, QuizError};
pub use playback::{AudioPlayer, PlaybackStatus, PlaybackTrigger, SilentPlayer};
pub use question::generate_question;
pub use quiz::{
    AdvanceOutcome, AdvanceTicket, AnswerOutcome, DEFAULT_ADVANCE_DELAY, QuizAction, QuizConfig,
    QuizMachine, QuizPhase, QuizSnapshot, SessionVersion,
};
pub use quiz_loop::QuizLoopService;
pub use shuffle::shuffled;
