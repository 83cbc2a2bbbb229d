use std::sync::Arc;
use std::time::Instant;

use crate::core::error::Result;
use crate::features::provinces::clients::ProvinceSourceClient;
use crate::features::provinces::models::Province;
use crate::features::provinces::repositories::ProvinceStore;

/// Keeps the province store in step with the remote source
pub struct ProvinceSyncService {
    source: ProvinceSourceClient,
    store: Arc<dyn ProvinceStore>,
}

impl ProvinceSyncService {
    pub fn new(source: ProvinceSourceClient, store: Arc<dyn ProvinceStore>) -> Self {
        Self { source, store }
    }

    /// Fetch the remote list and replace the whole store with it.
    ///
    /// Every record is converted before anything is deleted, so fetch and
    /// parse failures leave the store untouched. Returns the number of rows
    /// written.
    pub async fn sync(&self) -> Result<usize> {
        let started = Instant::now();

        let remote = self.source.fetch_provinces().await?;
        let provinces = Province::from_remote_batch(remote)?;

        self.store.replace_all(&provinces).await?;

        tracing::info!(
            "Synced {} provinces from {} in {}ms",
            provinces.len(),
            self.source.url(),
            started.elapsed().as_millis()
        );
        Ok(provinces.len())
    }

    pub async fn list(&self) -> Result<Vec<Province>> {
        self.store.list_all().await
    }
}
