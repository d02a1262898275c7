//! Error types for maquette

use thiserror::Error;

/// Main error type for maquette operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Cycle violation: {0}")]
    CycleViolation(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for maquette operations
pub type Result<T> = std::result::Result<T, Error>;
