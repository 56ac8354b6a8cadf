use crate::document::{ChartSpec, HtmlDocument, Page};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use tracker_core::chart::entity::ChartOptions;
use tracker_core::chart::error::ChartError;
use tracker_core::chart::port::{CandlestickSeries, ChartApi, ChartHandle, ChartLibrary};
use tracker_core::market::entity::Candle;
use tracker_core::view::port::Element;

/// # Summary
/// Lightweight Charts loaded from a CDN into a `Page`.
///
/// # Invariants
/// - Every `load` appends one `<script src>` to the page head; callers that
///   want a single script go through a load-once gate.
pub struct CdnChartLibrary {
    page: Page,
    script_url: String,
}

impl CdnChartLibrary {
    pub fn new(page: Page, script_url: impl Into<String>) -> Self {
        Self {
            page,
            script_url: script_url.into(),
        }
    }
}

#[async_trait]
impl ChartLibrary for CdnChartLibrary {
    /// # Summary
    /// Inject the library script and return the page-backed chart API.
    ///
    /// # Logic
    /// 1. Reject an empty script URL.
    /// 2. Append the script element to the page head.
    async fn load(&self) -> Result<Arc<dyn ChartApi>, ChartError> {
        if self.script_url.trim().is_empty() {
            return Err(ChartError::Load("empty script URL".to_string()));
        }

        let url = self.script_url.clone();
        self.page.update(|doc| doc.head_scripts.push(url));
        info!(url = %self.script_url, "Charting library script injected");

        Ok(Arc::new(PageChartApi {
            page: self.page.clone(),
        }))
    }
}

struct PageChartApi {
    page: Page,
}

impl ChartApi for PageChartApi {
    /// Replaces whatever chart the container held before.
    fn create_chart(
        &self,
        container: Element,
        options: &ChartOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartError> {
        let id = self.page.update(|doc| {
            let id = doc.next_chart_id;
            doc.next_chart_id += 1;
            doc.charts.insert(
                container,
                ChartSpec {
                    id,
                    options: options.clone(),
                    series: Vec::new(),
                },
            );
            id
        });

        Ok(Box::new(PageChart {
            page: self.page.clone(),
            container,
            id,
        }))
    }
}

struct PageChart {
    page: Page,
    container: Element,
    id: u64,
}

/// Chart `id` in `container`, if it has not been replaced since.
fn live_chart(doc: &mut HtmlDocument, container: Element, id: u64) -> Option<&mut ChartSpec> {
    doc.charts.get_mut(&container).filter(|chart| chart.id == id)
}

impl ChartHandle for PageChart {
    fn add_candlestick_series(&mut self) -> Result<Box<dyn CandlestickSeries>, ChartError> {
        let index = self.page.update(|doc| {
            live_chart(doc, self.container, self.id).map(|chart| {
                chart.series.push(Vec::new());
                chart.series.len() - 1
            })
        });

        let index = index.ok_or_else(|| {
            ChartError::Render(format!("chart in #{} was replaced", self.container.id()))
        })?;

        Ok(Box::new(PageSeries {
            page: self.page.clone(),
            container: self.container,
            chart_id: self.id,
            index,
        }))
    }
}

struct PageSeries {
    page: Page,
    container: Element,
    chart_id: u64,
    index: usize,
}

impl CandlestickSeries for PageSeries {
    fn set_data(&mut self, data: &[Candle]) -> Result<(), ChartError> {
        let stored = self.page.update(|doc| {
            match live_chart(doc, self.container, self.chart_id)
                .and_then(|chart| chart.series.get_mut(self.index))
            {
                Some(series) => {
                    *series = data.to_vec();
                    true
                }
                None => false,
            }
        });

        if stored {
            Ok(())
        } else {
            Err(ChartError::Render(format!(
                "chart in #{} was replaced",
                self.container.id()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::market::entity::CandleTime;

    fn candle(time: i64) -> Candle {
        Candle {
            time: CandleTime::Timestamp(time),
            open: 10.0,
            high: 11.0,
            low: 9.5,
            close: 10.5,
        }
    }

    #[tokio::test]
    async fn test_each_load_injects_a_script() {
        let page = Page::new("t");
        let library = CdnChartLibrary::new(page.clone(), "https://cdn.example/lwc.js");

        library.load().await.unwrap();
        library.load().await.unwrap();

        assert_eq!(page.snapshot().head_scripts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_url_fails_to_load() {
        let library = CdnChartLibrary::new(Page::new("t"), " ");
        assert!(matches!(library.load().await, Err(ChartError::Load(_))));
    }

    #[tokio::test]
    async fn test_new_chart_replaces_previous_one() {
        let page = Page::new("t");
        let api = CdnChartLibrary::new(page.clone(), "https://cdn.example/lwc.js")
            .load()
            .await
            .unwrap();

        let mut first = api.create_chart(Element::Chart, &ChartOptions::default()).unwrap();
        let mut stale = first.add_candlestick_series().unwrap();
        stale.set_data(&[candle(1)]).unwrap();

        let mut second = api.create_chart(Element::Chart, &ChartOptions::default()).unwrap();
        let mut series = second.add_candlestick_series().unwrap();
        series.set_data(&[candle(2), candle(3)]).unwrap();

        let doc = page.snapshot();
        assert_eq!(doc.charts.len(), 1);
        assert_eq!(doc.charts[&Element::Chart].series, vec![vec![candle(2), candle(3)]]);

        assert!(matches!(
            stale.set_data(&[candle(4)]),
            Err(ChartError::Render(_))
        ));
        assert!(matches!(
            first.add_candlestick_series(),
            Err(ChartError::Render(_))
        ));
        assert_eq!(doc.charts[&Element::Chart].id, 1);
    }
}
