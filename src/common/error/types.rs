//! Error types for chart construction and serialization.
use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for chart operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A series descriptor was rejected before anything was allocated
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// A print margin cannot be written as a schema `xsd:double`
    #[error("Invalid page margins: {0}")]
    InvalidPageMargins(String),

    /// Memory for the chart model could not be reserved
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML emission error
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, Error>;
