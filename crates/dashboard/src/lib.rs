//! # `tracker-dashboard` - search controller
//!
//! Wires the theme toggle and the search form to the chart and analysis
//! loaders. Depends only on the `tracker-core` ports; the app injects the
//! concrete HTTP, page and charting adapters.

pub mod controller;
pub mod gate;
pub mod messages;
pub mod render;
