//! Core error types
//!
//! Segmentation itself is total and never fails; errors only arise from
//! invalid analysis configuration.

use thiserror::Error;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
