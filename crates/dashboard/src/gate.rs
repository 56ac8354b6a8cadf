use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};
use tracker_core::chart::error::ChartError;
use tracker_core::chart::port::{ChartApi, ChartLibrary};

/// # Summary
/// Load-once gate in front of the charting library.
///
/// # Invariants
/// - At most one successful `ChartLibrary::load` per gate; every later caller
///   reuses the cached entry point.
/// - Concurrent callers wait on the same in-flight load.
/// - A failed load leaves the gate closed so the next caller tries again.
pub struct ChartGate {
    library: Arc<dyn ChartLibrary>,
    ready: OnceCell<Arc<dyn ChartApi>>,
}

impl ChartGate {
    pub fn new(library: Arc<dyn ChartLibrary>) -> Self {
        Self {
            library,
            ready: OnceCell::new(),
        }
    }

    /// # Summary
    /// Resolve once the library is usable.
    ///
    /// # Logic
    /// 1. Return the cached entry point if an earlier load succeeded.
    /// 2. Otherwise run the load and cache its result on success.
    pub async fn ready(&self) -> Result<Arc<dyn ChartApi>, ChartError> {
        let api = self
            .ready
            .get_or_try_init(|| async {
                info!("Loading charting library");
                self.library.load().await.inspect_err(|e| {
                    warn!("Charting library unavailable: {}", e);
                })
            })
            .await?;
        Ok(api.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }
}
