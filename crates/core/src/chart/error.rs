use thiserror::Error;

/// # Summary
/// Charting library failures.
///
/// # Invariants
/// - Must derive `Error` through `thiserror`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    // The library script could not be made available
    #[error("Library load failed: {0}")]
    Load(String),
    // A chart or series call was rejected
    #[error("Render failed: {0}")]
    Render(String),
}
