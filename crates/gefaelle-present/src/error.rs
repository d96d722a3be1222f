//! Error types for the presenters.

use thiserror::Error;

/// Errors that can occur while presenting a result.
#[derive(Error, Debug)]
pub enum PresentError {
    /// Both x and y are zero, so there is nothing to normalize by.
    #[error("cannot plot a zero-length segment")]
    DegenerateSegment,

    /// A coordinate is infinite or NaN.
    #[error("non-finite coordinate: {0}")]
    NonFiniteCoordinate(f64),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for presenter operations.
pub type Result<T> = std::result::Result<T, PresentError>;
