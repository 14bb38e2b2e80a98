//! # mesa-sheets-core
//!
//! Core data structures for the mesa-sheets formula evaluation engine.
//!
//! This crate provides the fundamental types used throughout mesa-sheets:
//! - [`CellAddress`] - Single-letter-column cell addressing ("A1" = row 0, col 0)
//! - [`CellValue`] and [`CellError`] - Computed cell values and error sentinels
//! - [`Cell`] - Raw text plus computed value with change detection
//! - [`Sheet`] - The dense cell grid with sparse change tracking
//!
//! ## Example
//!
//! ```rust
//! use mesa_sheets_core::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::new(50, 26).unwrap();
//! sheet.cell_mut(0, 0).unwrap().set_text("hello");
//! assert_eq!(sheet.cell_by_name("A1").unwrap().text(), "hello");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod sheet;
pub mod value;

// Re-exports for convenience
pub use address::CellAddress;
pub use cell::{Cell, TextChange};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use value::{CellError, CellValue};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (single-letter column names, A-Z)
pub const MAX_COLS: u16 = 26;
