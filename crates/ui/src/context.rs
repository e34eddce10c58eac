use std::sync::Arc;

use services::CatalogSource;

/// Capabilities the composition root provides to the UI.
pub trait UiApp: Send + Sync {
    fn catalog_source(&self) -> Arc<dyn CatalogSource>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog_source: Arc<dyn CatalogSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog_source: app.catalog_source(),
        }
    }

    #[must_use]
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.catalog_source)
    }
}

/// Build an `AppContext` from the composition root's app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
