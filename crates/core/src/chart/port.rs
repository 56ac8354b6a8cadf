use crate::chart::entity::ChartOptions;
use crate::chart::error::ChartError;
use crate::market::entity::Candle;
use crate::view::port::Element;
use async_trait::async_trait;
use std::sync::Arc;

/// # Summary
/// Loader for the external candlestick charting library.
///
/// # Invariants
/// - Each call to `load` performs one full load (e.g. one script injection).
///   Deduplication is the caller's job; see `tracker-dashboard`'s `ChartGate`.
#[async_trait]
pub trait ChartLibrary: Send + Sync {
    /// # Summary
    /// Make the library available and hand back its entry point.
    ///
    /// # Logic
    /// 1. Inject or fetch the library.
    /// 2. Resolve only after it is ready to construct charts.
    ///
    /// # Returns
    /// The library's chart factory, or `ChartError::Load`.
    async fn load(&self) -> Result<Arc<dyn ChartApi>, ChartError>;
}

/// # Summary
/// Entry point of a loaded charting library (`LightweightCharts`).
pub trait ChartApi: Send + Sync {
    /// Construct a chart bound to a container element.
    fn create_chart(
        &self,
        container: Element,
        options: &ChartOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartError>;
}

/// A chart instance living in one container.
pub trait ChartHandle: Send {
    fn add_candlestick_series(&mut self) -> Result<Box<dyn CandlestickSeries>, ChartError>;
}

/// A candlestick series on a chart.
pub trait CandlestickSeries: Send {
    /// Replace the series data with `data`, in order.
    fn set_data(&mut self, data: &[Candle]) -> Result<(), ChartError>;
}
