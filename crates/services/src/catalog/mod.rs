mod rest;
mod source;

// Public API of the catalog subsystem.
pub use crate::error::CatalogError;
pub use rest::{DEFAULT_ENDPOINT, RestCountriesProvider};
pub use source::CatalogSource;
