#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use catalog::{CatalogSource, DEFAULT_ENDPOINT, RestCountriesProvider};
pub use error::{CatalogError, QuizError};
pub use quiz::{
    Advance, AnswerOutcome, CHOICES_PER_ROUND, QuizEngine, QuizPhase, QuizProgress, TOTAL_ROUNDS,
};
