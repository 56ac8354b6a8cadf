use crate::command::Command;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracker_dashboard::controller::Dashboard;
use tracker_page::document::Page;
use tracker_page::error::PageError;

/// # Summary
/// One interactive session: the dashboard, the page it draws on and the file
/// the page is published to.
pub struct Session {
    dashboard: Arc<Dashboard>,
    page: Page,
    output: PathBuf,
}

impl Session {
    pub fn new(dashboard: Arc<Dashboard>, page: Page, output: impl Into<PathBuf>) -> Self {
        Self {
            dashboard,
            page,
            output: output.into(),
        }
    }

    /// # Summary
    /// Apply one command to the dashboard.
    ///
    /// # Logic
    /// 1. A submission is mirrored into the page form, then handed to the dashboard.
    /// 2. A theme command flips the body class.
    /// 3. `Quit` is the caller's business and does nothing here.
    pub async fn apply(&self, command: Command) {
        match command {
            Command::Submit(form) => {
                self.page.set_form(&form);
                let outcome = self.dashboard.submit(&form).await;
                info!(?outcome, "Submission finished");
            }
            Command::Theme(dark) => self.dashboard.toggle_theme(dark),
            Command::Quit => {}
        }
    }

    /// # Summary
    /// Rewrite the page file and hand back the alerts raised since the last call.
    ///
    /// # Returns
    /// Queued alerts, oldest first. A failed write leaves them queued.
    pub async fn publish(&self) -> Result<Vec<String>, PageError> {
        self.page.write_to(&self.output).await?;
        Ok(self.page.drain_alerts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::analysis::entity::AnalysisResult;
    use tracker_core::chart::entity::ChartOptions;
    use tracker_core::market::entity::ChartPayload;
    use tracker_core::market::error::StockApiError;
    use tracker_core::testing::{MockStockApi, RecordingChartLibrary};
    use tracker_core::view::port::SearchForm;
    use tracker_dashboard::messages::{CHART_LOAD_FAILED, UNSUPPORTED_RANGE};
    use tracker_page::view::PageView;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            symbol: None,
            score: 40.0,
            recommendation: "מכור".to_string(),
            notes: Vec::new(),
            sma10: None,
            sma50: None,
            ema20: None,
            rsi: None,
            macd_hist: None,
            upcoming_reports: Vec::new(),
        }
    }

    fn session(
        chart: Result<ChartPayload, StockApiError>,
        output: PathBuf,
    ) -> (Session, Arc<MockStockApi>) {
        let page = Page::new("t");
        let api = Arc::new(MockStockApi::new(chart, Ok(analysis())));
        let dashboard = Dashboard::new(
            api.clone(),
            Arc::new(PageView::new(page.clone())),
            Arc::new(RecordingChartLibrary::new()),
            ChartOptions::default(),
        );
        (Session::new(dashboard, page, output), api)
    }

    #[tokio::test]
    async fn test_submit_then_publish_writes_page() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("dashboard.html");
        let (session, api) = session(Err(StockApiError::Http(500)), output.clone());

        session
            .apply(Command::Submit(SearchForm::new("TSLA", "1h")))
            .await;
        let alerts = session.publish().await.unwrap();

        assert_eq!(alerts, vec![CHART_LOAD_FAILED.to_string()]);
        assert_eq!(api.calls().await.len(), 2);

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("id=\"symbolInput\" value=\"TSLA\""));
        assert!(html.contains("<div id=\"scoreBox\">ציון מניה: 40</div>"));

        assert!(session.publish().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_theme_and_rejected_range() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("dashboard.html");
        let (session, api) = session(
            Ok(ChartPayload {
                symbol: None,
                range: None,
                data: Vec::new(),
            }),
            output.clone(),
        );

        session.apply(Command::Theme(true)).await;
        session
            .apply(Command::Submit(SearchForm::new("TSLA", "2h")))
            .await;
        let alerts = session.publish().await.unwrap();

        assert_eq!(alerts, vec![UNSUPPORTED_RANGE.to_string()]);
        assert!(api.calls().await.is_empty());
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<body id=\"page-body\" class=\"dark\">"));
    }

    #[tokio::test]
    async fn test_unwritable_output_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("missing").join("dashboard.html");
        let (session, _) = session(Err(StockApiError::Http(500)), output);

        session
            .apply(Command::Submit(SearchForm::new("TSLA", "1d")))
            .await;

        assert!(matches!(session.publish().await, Err(PageError::Io(_))));
        assert_eq!(session.page.drain_alerts(), vec![CHART_LOAD_FAILED.to_string()]);
    }
}
