//! Error types for pacer.

use thiserror::Error;

/// Result type alias for pacer operations.
pub type Result<T> = std::result::Result<T, PacerError>;

/// Errors that can occur while setting up progress sampling.
///
/// Sampling itself never fails: a running sampler either completes or is
/// cancelled. These errors come from configuration and from opening the
/// streams being counted.
#[derive(Error, Debug)]
pub enum PacerError {
    /// The sampling interval was zero.
    #[error("Invalid sampling interval: must be greater than zero")]
    InvalidInterval,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
