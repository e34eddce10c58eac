use thiserror::Error;

use crate::model::{CountryError, RoundError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Country(#[from] CountryError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
