use crate::analysis::entity::AnalysisResult;
use crate::common::Range;
use crate::market::entity::{ChartPayload, HealthStatus};
use crate::market::error::StockApiError;
use async_trait::async_trait;

/// # Summary
/// Path and query of the chart endpoint for a symbol/range pair.
///
/// # Logic
/// 1. Interpolates the symbol verbatim into the path.
/// 2. Appends the range's wire form as the `range` query parameter.
pub fn chart_endpoint(symbol: &str, range: Range) -> String {
    format!("/api/stock/{}/chart?range={}", symbol, range)
}

/// # Summary
/// Path and query of the analysis endpoint for a symbol/range pair.
pub fn analysis_endpoint(symbol: &str, range: Range) -> String {
    format!("/api/stock/{}/analysis?range={}", symbol, range)
}

/// Path of the liveness endpoint.
pub const HEALTH_ENDPOINT: &str = "/health";

/// # Summary
/// Client contract for the tracker server's JSON API.
///
/// # Invariants
/// - Implementations issue exactly one request per call, with no retries.
/// - Only a typed `Range` is accepted, so unsupported ranges never reach the wire.
#[async_trait]
pub trait StockApi: Send + Sync {
    /// # Summary
    /// Fetch OHLC candles for a symbol.
    ///
    /// # Logic
    /// 1. GET `chart_endpoint(symbol, range)`.
    /// 2. Map a non-success status to `StockApiError::Http`.
    /// 3. Decode the body as `ChartPayload`.
    ///
    /// # Arguments
    /// * `symbol`: ticker as typed by the user (already trimmed).
    /// * `range`: bucket granularity.
    ///
    /// # Returns
    /// The decoded payload, or the failure that prevented it.
    async fn fetch_chart(&self, symbol: &str, range: Range) -> Result<ChartPayload, StockApiError>;

    /// # Summary
    /// Fetch the server-computed analysis for a symbol.
    ///
    /// # Logic
    /// 1. GET `analysis_endpoint(symbol, range)`.
    /// 2. Map a non-success status to `StockApiError::Http`.
    /// 3. Decode the body as `AnalysisResult`.
    async fn fetch_analysis(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<AnalysisResult, StockApiError>;

    /// # Summary
    /// Probe the server's liveness endpoint.
    async fn health(&self) -> Result<HealthStatus, StockApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_interpolate_verbatim() {
        assert_eq!(
            chart_endpoint("AAPL", Range::Day1),
            "/api/stock/AAPL/chart?range=1d"
        );
        assert_eq!(
            analysis_endpoint("AAPL", Range::Day1),
            "/api/stock/AAPL/analysis?range=1d"
        );
        assert_eq!(
            chart_endpoint("brk.b", Range::Minute15),
            "/api/stock/brk.b/chart?range=15m"
        );
    }
}
