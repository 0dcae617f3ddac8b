use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::OPTIONS_PER_QUESTION;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog needs at least {min} items to build questions, got {len}")]
    TooFewItems { len: usize, min: usize },

    #[error("catalog item {symbol:?} has an empty name")]
    EmptyName { symbol: String },

    #[error("catalog name {name:?} appears more than once")]
    DuplicateName { name: String },
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// One quiz subject: a symbol the user has to recognize by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    symbol: String,
    name: String,
    pronunciation: String,
    audio_ref: String,
    rule_tags: Vec<String>,
}

impl CatalogItem {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        pronunciation: impl Into<String>,
        audio_ref: impl Into<String>,
        rule_tags: Vec<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            pronunciation: pronunciation.into(),
            audio_ref: audio_ref.into(),
            rule_tags,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The answer the user must pick for this item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// Opaque reference handed to the audio collaborator.
    #[must_use]
    pub fn audio_ref(&self) -> &str {
        &self.audio_ref
    }

    #[must_use]
    pub fn rule_tags(&self) -> &[String] {
        &self.rule_tags
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// A validated, ordered, read-only set of quiz items.
///
/// Validation happens once here so a misconfigured catalog fails at startup
/// rather than on the first question that cannot find enough distractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TooFewItems` if there are fewer items than options per question.
    /// Returns `CatalogError::EmptyName` if any item has a blank name.
    /// Returns `CatalogError::DuplicateName` if two items share a name.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.len() < OPTIONS_PER_QUESTION {
            return Err(CatalogError::TooFewItems {
                len: items.len(),
                min: OPTIONS_PER_QUESTION,
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name().trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    symbol: item.symbol().to_string(),
                });
            }
            if !seen.insert(item.name()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name().to_string(),
                });
            }
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item name in catalog order; the pool distractors are drawn from.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_string()).collect()
    }
}
