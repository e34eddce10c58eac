mod catalog;
mod country;
mod round;
mod summary;

pub use catalog::CountryCatalog;
pub use country::{Country, CountryError, FlagUri};
pub use round::{CHOICES_PER_ROUND, Round, RoundError};
pub use summary::{QuizSummary, SummaryError};
