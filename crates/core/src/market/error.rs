use thiserror::Error;

/// # Summary
/// Failures talking to the tracker server.
///
/// # Invariants
/// - The dashboard surfaces every variant the same way; the split exists for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockApiError {
    // Server answered with a non-success status
    #[error("HTTP status {0}")]
    Http(u16),
    // Request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    // Body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
