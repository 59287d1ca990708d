//! Error types for daygrid.

use thiserror::Error;

/// Errors that can occur in daygrid operations.
///
/// Navigation and layout never fail; these cover parsing input and loading
/// configuration or event files.
#[derive(Error, Debug)]
pub enum DayGridError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No events file for {0}")]
    EventsNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daygrid operations.
pub type DayGridResult<T> = Result<T, DayGridError>;
