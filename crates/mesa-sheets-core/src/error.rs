//! Error types for mesa-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mesa-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell name format
    #[error("Invalid cell name: {0}")]
    InvalidName(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Invalid grid dimensions
    #[error("Invalid sheet dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: u32, cols: u16 },
}
