use async_trait::async_trait;

use quiz_core::model::CountryCatalog;

use crate::error::CatalogError;

/// Supplies the country catalog the quiz draws from.
///
/// Implementations perform one bulk load; the engine keeps the result in
/// memory and never asks again for the lifetime of a session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and filter the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the data cannot be fetched or parsed, or
    /// when no entry survives filtering.
    async fn load(&self) -> Result<CountryCatalog, CatalogError>;
}
