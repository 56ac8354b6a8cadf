use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use tracker_core::analysis::entity::AnalysisResult;
use tracker_core::common::Range;
use tracker_core::config::ServerConfig;
use tracker_core::market::entity::{ChartPayload, HealthStatus};
use tracker_core::market::error::StockApiError;
use tracker_core::market::port::{HEALTH_ENDPOINT, StockApi, analysis_endpoint, chart_endpoint};

/// # Summary
/// `StockApi` implementation speaking JSON over HTTP to the tracker server.
///
/// # Invariants
/// - Uses an async `reqwest` client; one request per call, never retried.
/// - `base_url` carries no trailing slash, so endpoint paths append verbatim.
#[derive(Clone)]
pub struct HttpStockApi {
    /// Shared HTTP client
    client: Client,
    /// Server origin, e.g. `http://127.0.0.1:5000`
    base_url: String,
}

impl HttpStockApi {
    /// # Summary
    /// Create a client for the configured server.
    ///
    /// # Logic
    /// 1. Install the rustls `ring` provider (no-op when already installed).
    /// 2. Build a reqwest client with the configured timeout and User-Agent.
    ///
    /// # Arguments
    /// * `config`: server section of the app configuration.
    ///
    /// # Returns
    /// The client, or `StockApiError::Network` when the TLS backend cannot start.
    pub fn new(config: &ServerConfig) -> Result<Self, StockApiError> {
        install_crypto_provider();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| StockApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.origin().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Summary
    /// GET `path` relative to the server origin and decode the JSON body.
    ///
    /// # Logic
    /// 1. Send the request; transport failures become `Network`.
    /// 2. Any non-2xx status becomes `Http(status)` without reading the body.
    /// 3. Decode the body; failures become `Parse`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StockApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StockApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%url, %status, "non-success response");
            return Err(StockApiError::Http(status.as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| StockApiError::Parse(e.to_string()))
    }
}

fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

#[async_trait]
impl StockApi for HttpStockApi {
    async fn fetch_chart(&self, symbol: &str, range: Range) -> Result<ChartPayload, StockApiError> {
        self.get_json(&chart_endpoint(symbol, range)).await
    }

    async fn fetch_analysis(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<AnalysisResult, StockApiError> {
        self.get_json(&analysis_endpoint(symbol, range)).await
    }

    async fn health(&self) -> Result<HealthStatus, StockApiError> {
        self.get_json(HEALTH_ENDPOINT).await
    }
}
