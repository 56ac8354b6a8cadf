//! # `tracker-core` - domain model and ports
//!
//! Entities, error enums and the trait ports shared by every other crate in the
//! workspace. Adapters (`tracker-feed`, `tracker-page`) implement the ports;
//! `tracker-dashboard` consumes them.

pub mod common;
pub mod config;

pub mod market {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod analysis {
    pub mod entity;
}

pub mod chart {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod view {
    pub mod markup;
    pub mod port;
}

#[cfg(feature = "test-utils")]
pub mod testing;
