//! Error types for the engine.
//!
//! Every fallible operation returns [`Result`]. None of these errors occur
//! during a normal `tick()`; when one does, the caller broke a contract and
//! the error should be propagated, not recovered from.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Coordinate access outside `[0, rows) x [0, columns)`.
    #[error("cell ({row}, {col}) is outside a {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    /// Rejected grid dimensions, spawn probability or input picture.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed TOML configuration.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Whether this error reports an out-of-bounds coordinate.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
