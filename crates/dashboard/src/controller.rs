use crate::gate::ChartGate;
use crate::messages::{ANALYSIS_LOAD_FAILED, CHART_LOAD_FAILED, UNSUPPORTED_RANGE};
use crate::render::{analysis_fragment, score_summary};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use tracker_core::chart::entity::ChartOptions;
use tracker_core::chart::error::ChartError;
use tracker_core::chart::port::ChartLibrary;
use tracker_core::common::{Range, RangeError};
use tracker_core::market::entity::Candle;
use tracker_core::market::error::StockApiError;
use tracker_core::market::port::StockApi;
use tracker_core::view::port::{DARK_CLASS, Element, SearchForm, View};

/// # Summary
/// Result of one chart load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    // Series received `points` candles
    Rendered { points: usize },
    // Request failed; the user was alerted
    FetchFailed(StockApiError),
    // Data arrived but the charting library could not draw it
    ChartUnavailable(ChartError),
}

/// # Summary
/// Result of one analysis load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Rendered,
    // Request failed; the error text is in the indicators container
    FetchFailed(StockApiError),
}

/// # Summary
/// Result of one search form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    // Empty symbol, nothing happened
    Ignored,
    // Unsupported range, alert shown, no request made
    Rejected(RangeError),
    // Both loaders ran, chart first
    Completed {
        chart: ChartOutcome,
        analysis: AnalysisOutcome,
    },
}

/// # Summary
/// Page controller: theme toggle, search form, chart and analysis loaders.
/// Depends only on `tracker-core` ports; concrete adapters are injected.
///
/// # Invariants
/// - `current_symbol` changes only after a submission passes validation.
/// - Chart and analysis requests of one submission are strictly sequential.
/// - The charting library goes through `ChartGate`, so it is loaded at most
///   once per controller.
pub struct Dashboard {
    // Tracker server client
    api: Arc<dyn StockApi>,
    // Page surface
    view: Arc<dyn View>,
    // Load-once charting library
    chart: ChartGate,
    chart_options: ChartOptions,
    // Symbol of the last accepted submission
    current_symbol: RwLock<Option<String>>,
}

impl Dashboard {
    /// # Summary
    /// Create a dashboard.
    ///
    /// # Arguments
    /// * `api` - tracker server client.
    /// * `view` - page surface receiving alerts and content.
    /// * `library` - charting library loader, wrapped in a `ChartGate`.
    /// * `chart_options` - options passed to every `create_chart`.
    ///
    /// # Returns
    /// * `Arc<Self>` - shareable controller.
    pub fn new(
        api: Arc<dyn StockApi>,
        view: Arc<dyn View>,
        library: Arc<dyn ChartLibrary>,
        chart_options: ChartOptions,
    ) -> Arc<Self> {
        Arc::new(Self {
            api,
            view,
            chart: ChartGate::new(library),
            chart_options,
            current_symbol: RwLock::new(None),
        })
    }

    /// Theme checkbox change handler.
    pub fn toggle_theme(&self, checked: bool) {
        debug!(checked, "Theme toggled");
        self.view.set_body_class(DARK_CLASS, checked);
    }

    /// # Summary
    /// Symbol of the last accepted submission.
    ///
    /// # Returns
    /// `None` until a submission passes range validation.
    pub async fn current_symbol(&self) -> Option<String> {
        self.current_symbol.read().await.clone()
    }

    /// # Summary
    /// Search form submit handler.
    ///
    /// # Logic
    /// 1. Trim the symbol; an empty symbol is ignored silently.
    /// 2. Validate the range; on failure alert and stop before any request.
    /// 3. Record the symbol as the current one.
    /// 4. Await the chart load, then the analysis load. A chart failure does
    ///    not skip the analysis.
    ///
    /// # Arguments
    /// * `form` - raw form values.
    ///
    /// # Returns
    /// What happened, for logging and tests.
    pub async fn submit(&self, form: &SearchForm) -> SubmitOutcome {
        let symbol = form.symbol.trim();
        if symbol.is_empty() {
            debug!("Empty symbol, submission ignored");
            return SubmitOutcome::Ignored;
        }

        let range = match form.range.parse::<Range>() {
            Ok(range) => range,
            Err(e) => {
                warn!(symbol, "Submission rejected: {}", e);
                self.view.alert(UNSUPPORTED_RANGE);
                return SubmitOutcome::Rejected(e);
            }
        };

        *self.current_symbol.write().await = Some(symbol.to_string());
        info!(symbol, %range, "Search submitted");

        let chart = self.load_chart(symbol, range).await;
        let analysis = self.load_analysis(symbol, range).await;

        SubmitOutcome::Completed { chart, analysis }
    }

    /// # Summary
    /// Fetch candles and draw them as a candlestick series.
    ///
    /// # Logic
    /// 1. Fetch the chart payload; on failure alert and return.
    /// 2. Wait for the charting library through the gate.
    /// 3. Create a chart in the chart container, add a candlestick series,
    ///    and hand it the candles unchanged.
    pub async fn load_chart(&self, symbol: &str, range: Range) -> ChartOutcome {
        let payload = match self.api.fetch_chart(symbol, range).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(symbol, %range, "Chart load failed: {}", e);
                self.view.alert(CHART_LOAD_FAILED);
                return ChartOutcome::FetchFailed(e);
            }
        };

        match self.render_chart(&payload.data).await {
            Ok(()) => {
                debug!(symbol, %range, points = payload.data.len(), "Chart rendered");
                ChartOutcome::Rendered {
                    points: payload.data.len(),
                }
            }
            Err(e) => {
                warn!(symbol, %range, "Chart render failed: {}", e);
                ChartOutcome::ChartUnavailable(e)
            }
        }
    }

    async fn render_chart(&self, data: &[Candle]) -> Result<(), ChartError> {
        let api = self.chart.ready().await?;
        let mut chart = api.create_chart(Element::Chart, &self.chart_options)?;
        let mut series = chart.add_candlestick_series()?;
        series.set_data(data)
    }

    /// # Summary
    /// Fetch the analysis and fill the indicators and score containers.
    ///
    /// # Logic
    /// 1. Fetch; on failure write the error text into the indicators container.
    /// 2. Write the rendered fragment, then the score summary.
    pub async fn load_analysis(&self, symbol: &str, range: Range) -> AnalysisOutcome {
        match self.api.fetch_analysis(symbol, range).await {
            Ok(analysis) => {
                self.view
                    .set_html(Element::IndicatorsContent, &analysis_fragment(&analysis));
                self.view.set_text(Element::ScoreBox, &score_summary(&analysis));
                debug!(symbol, %range, score = analysis.score, "Analysis rendered");
                AnalysisOutcome::Rendered
            }
            Err(e) => {
                warn!(symbol, %range, "Analysis load failed: {}", e);
                self.view
                    .set_text(Element::IndicatorsContent, ANALYSIS_LOAD_FAILED);
                AnalysisOutcome::FetchFailed(e)
            }
        }
    }
}
