use thiserror::Error;

/// # Summary
/// Page rendering and output failures.
#[derive(Error, Debug)]
pub enum PageError {
    // Chart data could not be encoded for the inline script
    #[error("Serialize error: {0}")]
    Serialize(String),
    // Writing the page file failed
    #[error("IO error: {0}")]
    Io(String),
}
