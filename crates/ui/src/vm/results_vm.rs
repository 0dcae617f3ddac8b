use quiz_core::model::QuizSummary;

use super::time_fmt::{format_one_decimal, format_two_decimals};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongAnswerRowVm {
    pub symbol: String,
    pub correct_answer: String,
    pub user_answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub max_streak: u32,
    pub accuracy: String,
    pub total_seconds: u64,
    pub average_seconds: String,
    pub wrong_answers: Vec<WrongAnswerRowVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.wrong_answers.is_empty()
    }
}

#[must_use]
pub fn map_results_vm(summary: &QuizSummary) -> ResultsVm {
    let score = summary.score();
    ResultsVm {
        total: score.total,
        correct: score.correct,
        incorrect: score.incorrect,
        max_streak: score.max_streak,
        accuracy: format_two_decimals(summary.accuracy_percent()),
        total_seconds: summary.total_seconds(),
        average_seconds: format_one_decimal(summary.average_seconds_per_question()),
        wrong_answers: summary
            .wrong_answers()
            .iter()
            .map(|wrong| WrongAnswerRowVm {
                symbol: wrong.symbol.clone(),
                correct_answer: wrong.correct_answer.clone(),
                user_answer: wrong.user_answer.clone(),
            })
            .collect(),
    }
}
