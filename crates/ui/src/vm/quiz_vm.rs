use services::{QuizError, QuizLoopService, QuizPhase, QuizSnapshot};

use super::time_fmt::format_clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(usize),
    ReplayAudio,
    ToggleMute,
    EndNow,
    Restart,
}

/// Forward a user intent to the quiz loop.
///
/// # Errors
///
/// Returns the `QuizError` from the loop; invalid transitions (double clicks, late
/// key presses) are expected and safe to ignore.
pub fn apply_intent(quiz_loop: &QuizLoopService, intent: QuizIntent) -> Result<(), QuizError> {
    match intent {
        QuizIntent::Start => quiz_loop.start(),
        QuizIntent::Answer(index) => quiz_loop.answer(index).map(|_| ()),
        QuizIntent::ReplayAudio => {
            quiz_loop.replay_audio();
            Ok(())
        }
        QuizIntent::ToggleMute => {
            quiz_loop.toggle_mute();
            Ok(())
        }
        QuizIntent::EndNow => quiz_loop.end_now(),
        QuizIntent::Restart => quiz_loop.restart(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    PickedCorrect,
    PickedWrong,
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
}

impl OptionVm {
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.state != OptionState::Open
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            OptionState::Open | OptionState::Locked => "quiz-option",
            OptionState::PickedCorrect => "quiz-option quiz-option--correct",
            OptionState::PickedWrong => "quiz-option quiz-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    pub symbol: String,
    pub pronunciation: String,
    pub rule_tags: Vec<String>,
    pub options: Vec<OptionVm>,
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
    pub question_secs: u64,
    pub session_clock: String,
    pub progress_percent: f64,
    pub progress_label: String,
    pub muted: bool,
    pub answered: bool,
}

impl QuizVm {
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.1}%;", self.progress_percent)
    }

    #[must_use]
    pub fn mute_icon(&self) -> &'static str {
        if self.muted { "🔇" } else { "🔊" }
    }
}

/// View model for the question screen; `None` unless a question is on screen.
#[must_use]
pub fn map_quiz_vm(snapshot: &QuizSnapshot) -> Option<QuizVm> {
    if snapshot.phase != QuizPhase::InProgress {
        return None;
    }
    let question = snapshot.question.as_ref()?;
    let item = question.item();

    // Only the picked option is coloured; the rest are locked once answered.
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let state = match snapshot.selected_index {
                None => OptionState::Open,
                Some(picked) if picked == index && question.is_correct(index) => {
                    OptionState::PickedCorrect
                }
                Some(picked) if picked == index => OptionState::PickedWrong,
                Some(_) => OptionState::Locked,
            };
            OptionVm {
                index,
                label: label.clone(),
                state,
            }
        })
        .collect();

    Some(QuizVm {
        symbol: item.symbol().to_string(),
        pronunciation: item.pronunciation().to_string(),
        rule_tags: item.rule_tags().to_vec(),
        options,
        correct: snapshot.score.correct,
        incorrect: snapshot.score.incorrect,
        streak: snapshot.score.streak,
        question_secs: snapshot.elapsed_question_secs,
        session_clock: format_clock(snapshot.elapsed_session_secs),
        progress_percent: snapshot.progress_percent,
        progress_label: format!(
            "{} / {}",
            snapshot.position + 1,
            snapshot.total_questions
        ),
        muted: snapshot.muted,
        answered: snapshot.has_answered(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::content::arabic_alphabet;
    use quiz_core::time::fixed_clock;
    use services::{PlaybackTrigger, QuizConfig, QuizMachine, SilentPlayer};

    use super::*;

    fn quiz_loop() -> QuizLoopService {
        let machine = QuizMachine::seeded(arabic_alphabet().unwrap(), QuizConfig::default(), 3)
            .with_clock(fixed_clock());
        QuizLoopService::new(machine, PlaybackTrigger::new(Arc::new(SilentPlayer)))
    }

    #[test]
    fn no_vm_before_start() {
        assert!(map_quiz_vm(&quiz_loop().snapshot()).is_none());
    }

    #[test]
    fn fresh_question_has_open_options() {
        let quiz_loop = quiz_loop();
        apply_intent(&quiz_loop, QuizIntent::Start).unwrap();
        let vm = map_quiz_vm(&quiz_loop.snapshot()).unwrap();

        assert_eq!(vm.options.len(), 3);
        assert!(vm.options.iter().all(|option| !option.disabled()));
        assert!(!vm.answered);
        assert_eq!(vm.progress_label, "1 / 28");
        assert_eq!(vm.session_clock, "0:00");
        assert_eq!(vm.mute_icon(), "🔊");
        assert!(!vm.symbol.is_empty());
    }

    #[tokio::test]
    async fn wrong_pick_marks_only_that_option() {
        let quiz_loop = quiz_loop();
        apply_intent(&quiz_loop, QuizIntent::Start).unwrap();
        let correct = quiz_loop.snapshot().question.unwrap().correct_index();
        let wrong = (correct + 1) % 3;
        apply_intent(&quiz_loop, QuizIntent::Answer(wrong)).unwrap();

        let vm = map_quiz_vm(&quiz_loop.snapshot()).unwrap();
        assert_eq!(vm.options[wrong].state, OptionState::PickedWrong);
        assert_eq!(vm.options[correct].state, OptionState::Locked);
        assert!(vm.options.iter().all(OptionVm::disabled));
        assert!(vm.answered);
        assert_eq!(vm.incorrect, 1);
        assert_eq!(vm.streak, 0);
    }

    #[tokio::test]
    async fn double_answer_is_an_invalid_transition() {
        let quiz_loop = quiz_loop();
        apply_intent(&quiz_loop, QuizIntent::Start).unwrap();
        apply_intent(&quiz_loop, QuizIntent::Answer(0)).unwrap();
        let err = apply_intent(&quiz_loop, QuizIntent::Answer(1)).unwrap_err();
        assert!(err.is_invalid_transition());
    }

    #[test]
    fn toggle_mute_flips_icon() {
        let quiz_loop = quiz_loop();
        apply_intent(&quiz_loop, QuizIntent::Start).unwrap();
        apply_intent(&quiz_loop, QuizIntent::ToggleMute).unwrap();
        let vm = map_quiz_vm(&quiz_loop.snapshot()).unwrap();
        assert!(vm.muted);
        assert_eq!(vm.mute_icon(), "🔇");
    }
}
