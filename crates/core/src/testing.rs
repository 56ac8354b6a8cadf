//! In-memory doubles for the core ports, enabled with the `test-utils` feature.

use crate::analysis::entity::AnalysisResult;
use crate::chart::entity::ChartOptions;
use crate::chart::error::ChartError;
use crate::chart::port::{CandlestickSeries, ChartApi, ChartHandle, ChartLibrary};
use crate::common::Range;
use crate::market::entity::{Candle, ChartPayload, HealthStatus};
use crate::market::error::StockApiError;
use crate::market::port::{HEALTH_ENDPOINT, StockApi, analysis_endpoint, chart_endpoint};
use crate::view::port::{Element, View};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Summary
/// `StockApi` double answering with canned results and recording every
/// requested endpoint path in call order.
pub struct MockStockApi {
    chart: Result<ChartPayload, StockApiError>,
    analysis: Result<AnalysisResult, StockApiError>,
    calls: tokio::sync::Mutex<Vec<String>>,
}

impl MockStockApi {
    pub fn new(
        chart: Result<ChartPayload, StockApiError>,
        analysis: Result<AnalysisResult, StockApiError>,
    ) -> Self {
        Self {
            chart,
            analysis,
            calls: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// Endpoint paths requested so far.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl StockApi for MockStockApi {
    async fn fetch_chart(&self, symbol: &str, range: Range) -> Result<ChartPayload, StockApiError> {
        self.calls.lock().await.push(chart_endpoint(symbol, range));
        self.chart.clone()
    }

    async fn fetch_analysis(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<AnalysisResult, StockApiError> {
        self.calls.lock().await.push(analysis_endpoint(symbol, range));
        self.analysis.clone()
    }

    async fn health(&self) -> Result<HealthStatus, StockApiError> {
        self.calls.lock().await.push(HEALTH_ENDPOINT.to_string());
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }
}

/// One observed `View` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Alert(String),
    BodyClass { class: String, enabled: bool },
    Text(Element, String),
    Html(Element, String),
}

/// # Summary
/// `View` double that records every call.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        lock(&self.events).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Alert(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    /// Latest text written to `target`, if any.
    pub fn text_of(&self, target: Element) -> Option<String> {
        lock(&self.events).iter().rev().find_map(|e| match e {
            ViewEvent::Text(el, text) if *el == target => Some(text.clone()),
            _ => None,
        })
    }

    /// Latest HTML written to `target`, if any.
    pub fn html_of(&self, target: Element) -> Option<String> {
        lock(&self.events).iter().rev().find_map(|e| match e {
            ViewEvent::Html(el, html) if *el == target => Some(html.clone()),
            _ => None,
        })
    }
}

impl View for RecordingView {
    fn alert(&self, message: &str) {
        lock(&self.events).push(ViewEvent::Alert(message.to_string()));
    }

    fn set_body_class(&self, class: &str, enabled: bool) {
        lock(&self.events).push(ViewEvent::BodyClass {
            class: class.to_string(),
            enabled,
        });
    }

    fn set_text(&self, target: Element, text: &str) {
        lock(&self.events).push(ViewEvent::Text(target, text.to_string()));
    }

    fn set_html(&self, target: Element, html: &str) {
        lock(&self.events).push(ViewEvent::Html(target, html.to_string()));
    }
}

/// A series as it reached the charting library.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSeries {
    pub container: Element,
    pub options: ChartOptions,
    pub data: Vec<Candle>,
}

/// # Summary
/// `ChartLibrary` double counting loads and capturing `set_data` calls.
///
/// # Invariants
/// - The first `failing_loads` calls to `load` fail with `ChartError::Load`.
#[derive(Default)]
pub struct RecordingChartLibrary {
    loads: AtomicUsize,
    failing_loads: usize,
    rendered: Arc<Mutex<Vec<RenderedSeries>>>,
}

impl RecordingChartLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(failing_loads: usize) -> Self {
        Self {
            failing_loads,
            ..Self::default()
        }
    }

    /// Number of `load` calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn rendered(&self) -> Vec<RenderedSeries> {
        lock(&self.rendered).clone()
    }
}

#[async_trait]
impl ChartLibrary for RecordingChartLibrary {
    async fn load(&self) -> Result<Arc<dyn ChartApi>, ChartError> {
        let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failing_loads {
            return Err(ChartError::Load(format!("attempt {} refused", attempt + 1)));
        }
        Ok(Arc::new(RecordingChartApi {
            rendered: self.rendered.clone(),
        }))
    }
}

struct RecordingChartApi {
    rendered: Arc<Mutex<Vec<RenderedSeries>>>,
}

impl ChartApi for RecordingChartApi {
    fn create_chart(
        &self,
        container: Element,
        options: &ChartOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartError> {
        Ok(Box::new(RecordingChart {
            container,
            options: options.clone(),
            rendered: self.rendered.clone(),
        }))
    }
}

struct RecordingChart {
    container: Element,
    options: ChartOptions,
    rendered: Arc<Mutex<Vec<RenderedSeries>>>,
}

impl ChartHandle for RecordingChart {
    fn add_candlestick_series(&mut self) -> Result<Box<dyn CandlestickSeries>, ChartError> {
        Ok(Box::new(RecordingChart {
            container: self.container,
            options: self.options.clone(),
            rendered: self.rendered.clone(),
        }))
    }
}

impl CandlestickSeries for RecordingChart {
    fn set_data(&mut self, data: &[Candle]) -> Result<(), ChartError> {
        lock(&self.rendered).push(RenderedSeries {
            container: self.container,
            options: self.options.clone(),
            data: data.to_vec(),
        });
        Ok(())
    }
}
