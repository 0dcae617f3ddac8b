use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::catalog::CatalogItem;

/// Every question offers the correct name plus two distractors.
pub const OPTIONS_PER_QUESTION: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionShapeError {
    #[error("correct index {index} is outside the {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("option at the correct index is {found:?}, expected {expected:?}")]
    CorrectAnswerMismatch { expected: String, found: String },
}

/// A multiple-choice question derived from one catalog item.
///
/// Questions are never mutated; a new one is generated whenever the active item changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    item: CatalogItem,
    options: [String; OPTIONS_PER_QUESTION],
    correct_index: usize,
}

impl Question {
    /// Assemble a question from already-shuffled options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionShapeError` unless `correct_index` points at `item.name()`.
    pub fn new(
        item: CatalogItem,
        options: [String; OPTIONS_PER_QUESTION],
        correct_index: usize,
    ) -> Result<Self, QuestionShapeError> {
        let Some(found) = options.get(correct_index) else {
            return Err(QuestionShapeError::CorrectIndexOutOfRange {
                index: correct_index,
                len: OPTIONS_PER_QUESTION,
            });
        };
        if found != item.name() {
            return Err(QuestionShapeError::CorrectAnswerMismatch {
                expected: item.name().to_string(),
                found: found.clone(),
            });
        }
        Ok(Self {
            item,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}
