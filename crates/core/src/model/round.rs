use std::collections::HashSet;
use thiserror::Error;

use crate::model::country::Country;

/// Number of choices presented per round, the correct one included.
pub const CHOICES_PER_ROUND: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round needs exactly {expected} choices, got {got}")]
    WrongChoiceCount { expected: usize, got: usize },

    #[error("round choices repeat the name {name}")]
    DuplicateChoice { name: String },

    #[error("the correct country is not among the choices")]
    CorrectNotInChoices,

    #[error("round index must be at least 1")]
    InvalidIndex,
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// One flag-guessing question: a correct country plus the choices shown.
///
/// Created fresh for every round and discarded once scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    correct: Country,
    choices: Vec<Country>,
    index: u32,
}

impl Round {
    /// Builds a round, checking the choice-set invariants.
    ///
    /// # Errors
    ///
    /// Returns `RoundError` when the choice count is wrong, a name repeats,
    /// the correct country is missing from the choices, or the index is
    /// zero.
    pub fn new(correct: Country, choices: Vec<Country>, index: u32) -> Result<Self, RoundError> {
        if index == 0 {
            return Err(RoundError::InvalidIndex);
        }
        if choices.len() != CHOICES_PER_ROUND {
            return Err(RoundError::WrongChoiceCount {
                expected: CHOICES_PER_ROUND,
                got: choices.len(),
            });
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            if !seen.insert(choice.name()) {
                return Err(RoundError::DuplicateChoice {
                    name: choice.name().to_owned(),
                });
            }
        }
        if !seen.contains(correct.name()) {
            return Err(RoundError::CorrectNotInChoices);
        }

        Ok(Self {
            correct,
            choices,
            index,
        })
    }

    #[must_use]
    pub fn correct(&self) -> &Country {
        &self.correct
    }

    /// Choices in presentation order.
    #[must_use]
    pub fn choices(&self) -> &[Country] {
        &self.choices
    }

    /// 1-based position of this round within the quiz.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Exact-match comparison against the correct country's name.
    #[must_use]
    pub fn is_correct(&self, chosen_name: &str) -> bool {
        self.correct.name() == chosen_name
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
