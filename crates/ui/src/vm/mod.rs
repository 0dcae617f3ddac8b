mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{OptionState, OptionVm, QuizIntent, QuizVm, apply_intent, map_quiz_vm};
pub use results_vm::{ResultsVm, WrongAnswerRowVm, map_results_vm};
pub use time_fmt::{format_clock, format_one_decimal, format_two_decimals};
