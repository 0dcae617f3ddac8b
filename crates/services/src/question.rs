use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{CatalogItem, OPTIONS_PER_QUESTION, Question};

use crate::error::QuestionError;
use crate::shuffle::shuffled;

const DISTRACTORS: usize = OPTIONS_PER_QUESTION - 1;

/// Build a multiple-choice question for `item`, drawing distractors from `name_pool`.
///
/// The pool is filtered against the item's own name only; duplicate names elsewhere in the
/// pool are not collapsed. Every call reshuffles, so callers keep the result for as long as
/// the question is on screen.
///
/// # Errors
///
/// Returns `QuestionError::InsufficientDistractors` when fewer than two other names remain.
pub fn generate_question<R: Rng + ?Sized>(
    item: &CatalogItem,
    name_pool: &[String],
    rng: &mut R,
) -> Result<Question, QuestionError> {
    let candidates: Vec<&str> = name_pool
        .iter()
        .map(String::as_str)
        .filter(|name| *name != item.name())
        .collect();

    if candidates.len() < DISTRACTORS {
        return Err(QuestionError::InsufficientDistractors {
            name: item.name().to_string(),
            needed: DISTRACTORS,
            available: candidates.len(),
        });
    }

    let candidates = shuffled(&candidates, rng);

    // Slot permutation: choice `i` lands at `slots[i]`; the correct name is the last choice.
    let mut slots: [usize; OPTIONS_PER_QUESTION] = [0, 1, 2];
    slots.shuffle(rng);
    let choices = [candidates[0], candidates[1], item.name()];
    let mut options: [String; OPTIONS_PER_QUESTION] = Default::default();
    for (choice, slot) in choices.iter().zip(slots) {
        options[slot] = (*choice).to_string();
    }

    Ok(Question::new(item.clone(), options, slots[DISTRACTORS])?)
}
