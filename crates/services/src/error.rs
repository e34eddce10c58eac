//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{RoundError, SummaryError};

use crate::quiz::QuizPhase;

/// Errors emitted while loading the country catalog.
///
/// Every variant means the same thing to callers: country data is
/// unavailable and a quiz cannot start. The load is a single attempt;
/// nothing here is retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("country request failed")]
    Http(#[from] reqwest::Error),

    #[error("country endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("country response could not be parsed")]
    Parse(#[from] serde_json::Error),

    #[error("no usable country entries after filtering")]
    EmptyCatalog,
}

/// Errors emitted by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("not enough distinct countries for a round: have {available}, need {needed}")]
    InsufficientData { available: usize, needed: usize },

    #[error("{operation} is not allowed in the {phase:?} phase")]
    InvalidTransition {
        operation: &'static str,
        phase: QuizPhase,
    },

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}
