use crate::config::ServerConfig;
use crate::error::ServerResult;
use articles::{Catalog, CatalogResult};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Catalog over the data directory (re-reads files on every call)
    pub catalog: Catalog,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog = Catalog::new(config.catalog.clone())?;

        if !catalog.store().is_available() {
            tracing::warn!(
                data_dir = %catalog.store().root().display(),
                "data directory does not exist yet"
            );
        }

        Ok(Self {
            config: Arc::new(config),
            catalog,
        })
    }

    /// Ready once the data directory exists
    pub fn is_ready(&self) -> bool {
        self.catalog.store().is_available()
    }

    /// Run a catalog operation on the blocking pool
    ///
    /// Catalog calls read files synchronously; keep them off the async workers.
    pub async fn with_catalog<T, F>(&self, op: F) -> ServerResult<T>
    where
        F: FnOnce(&Catalog) -> CatalogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.catalog.clone();
        let result = tokio::task::spawn_blocking(move || op(&catalog)).await?;
        Ok(result?)
    }
}
