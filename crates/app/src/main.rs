mod command;
mod logging;
mod session;
mod settings;

use std::sync::Arc;

use command::{Command, parse_command};
use session::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracker_core::chart::entity::ChartOptions;
use tracker_core::market::port::StockApi;
use tracker_core::view::port::SearchForm;
use tracker_dashboard::controller::Dashboard;
use tracker_feed::http::HttpStockApi;
use tracker_page::chart::CdnChartLibrary;
use tracker_page::document::Page;
use tracker_page::view::PageView;

const USAGE: &str = "SYMBOL RANGE | :dark on|off | :quit";

/// # Summary
/// Application entry point and DI container.
/// Builds the concrete adapters and injects them into `Dashboard` as `Arc<dyn Trait>`.
///
/// # Logic
/// 1. Load `.env` and configuration, then install logging.
/// 2. Build the HTTP API, the page and its view and chart library.
/// 3. Apply the configured theme and probe the server once.
/// 4. With `SYMBOL RANGE` arguments, submit once and exit.
/// 5. Otherwise run the command loop until `:quit`, EOF or Ctrl-C.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = settings::load()?;
    let _guard = logging::init(&config.log)?;
    info!("Tracker client starting...");

    let api = Arc::new(HttpStockApi::new(&config.server)?);
    let page = Page::new(config.page.title.clone());
    let view = Arc::new(PageView::new(page.clone()));
    let library = Arc::new(CdnChartLibrary::new(page.clone(), config.chart.cdn_url.clone()));
    let dashboard = Dashboard::new(api.clone(), view, library, ChartOptions::default());

    dashboard.toggle_theme(config.page.dark_theme);
    let session = Session::new(dashboard, page, &config.page.output);

    match api.health().await {
        Ok(health) => info!(base_url = api.base_url(), status = %health.status, "Server reachable"),
        Err(e) => warn!(base_url = api.base_url(), "Health check failed: {}", e),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [symbol, range] = args.as_slice() {
        let form = SearchForm::new(symbol.as_str(), range.as_str());
        session.apply(Command::Submit(form)).await;
        report_alerts(session.publish().await?);
        return Ok(());
    }
    if !args.is_empty() {
        eprintln!("usage: tracker [SYMBOL RANGE]");
        return Ok(());
    }

    eprintln!("{}", USAGE);
    report_alerts(session.publish().await?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{} ({})", e, USAGE);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        session.apply(command).await;
        match session.publish().await {
            Ok(alerts) => report_alerts(alerts),
            Err(e) => {
                warn!("Page write failed: {}", e);
                eprintln!("{}", e);
            }
        }
    }

    info!("Tracker client exiting");
    Ok(())
}

fn report_alerts(alerts: Vec<String>) {
    for alert in alerts {
        eprintln!("{}", alert);
    }
}
