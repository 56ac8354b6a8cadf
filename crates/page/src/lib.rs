//! # `tracker-page` - static HTML dashboard
//!
//! Adapters that render the dashboard into a standalone HTML page keeping the
//! element ids of the page contract:
//! - `PageView` implements the `View` port.
//! - `CdnChartLibrary` implements the `ChartLibrary` port by injecting the
//!   Lightweight Charts script and emitting the chart calls as inline script.

pub mod chart;
pub mod document;
pub mod error;
pub mod view;
