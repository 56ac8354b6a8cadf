//! # `tracker-feed` - tracker server adapter
//!
//! `reqwest` implementation of the `StockApi` port.

pub mod http;
