//! Error types for the toy robot.
//!
//! Ordinary domain failures (out-of-bounds placement, a move off the edge,
//! commands sent to an unplaced robot) are not errors; they are reported as
//! `false` by [`Robot`](crate::Robot). The types here cover genuine faults.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (command file, report file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table dimensions must both be positive
    #[error("Invalid table dimensions: {length}x{width}")]
    InvalidTable { length: i32, width: i32 },
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Why a line of command text could not be turned into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unsupported command: {0:?}")]
    Unsupported(String),

    /// `PLACE` without exactly three comma-separated arguments
    #[error("malformed PLACE arguments: {0:?}")]
    InvalidPlace(String),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("invalid direction: {0:?}")]
    InvalidFacing(String),
}
