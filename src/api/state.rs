use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::services::catalog::{load_snapshot, CatalogSnapshot, CatalogSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Current catalog; swapped wholesale on reload
    pub catalog: Arc<RwLock<Arc<CatalogSnapshot>>>,
    pub source: Arc<dyn CatalogSource>,
}

impl AppState {
    /// Creates state serving an already loaded snapshot
    pub fn new(source: Arc<dyn CatalogSource>, snapshot: CatalogSnapshot) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(snapshot))),
            source,
        }
    }

    /// Loads the first snapshot, starting empty if the source fails
    pub async fn bootstrap(source: Arc<dyn CatalogSource>) -> Self {
        let snapshot = match load_snapshot(source.as_ref()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "Initial catalog load failed, starting empty");
                CatalogSnapshot::empty()
            }
        };
        Self::new(source, snapshot)
    }

    /// The snapshot current at the time of the call
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.catalog.read().await.clone()
    }

    /// Reloads from the source; the old snapshot stays on failure
    pub async fn reload(&self) -> AppResult<Arc<CatalogSnapshot>> {
        let fresh = Arc::new(load_snapshot(self.source.as_ref()).await?);
        *self.catalog.write().await = fresh.clone();
        Ok(fresh)
    }
}
