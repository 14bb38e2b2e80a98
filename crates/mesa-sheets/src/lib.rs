//! # mesa-sheets
//!
//! A spreadsheet engine with four-operator formula evaluation and
//! dependency-driven recalculation.
//!
//! Cells hold raw text; text starting with `=` is a formula over numbers,
//! cell references, `+ - * /`, and parentheses. Edits cascade: changing a
//! cell recomputes every cell that transitively depends on it, and invalid
//! formulas (bad syntax, self, missing, or circular references) surface as
//! error sentinels in the cell value rather than as API errors.
//!
//! ## Example
//!
//! ```rust
//! use mesa_sheets::prelude::*;
//!
//! let mut sheet = Spreadsheet::new(50, 26).unwrap();
//!
//! sheet.set_text("A1", "10").unwrap();
//! sheet.set_text("A2", "=A1*2+5").unwrap();
//! assert_eq!(sheet.cell_value_by_name("A2").unwrap().as_number(), Some(25.0));
//!
//! // editing A1 recomputes A2
//! sheet.set_text("A1", "20").unwrap();
//! assert_eq!(sheet.cell_value_by_name("A2").unwrap().as_number(), Some(45.0));
//! ```

pub mod event;
pub mod prelude;

mod error;
mod persist;
mod spreadsheet;

pub use error::{Error, Result};
pub use event::{CellChange, ChangeKind};
pub use spreadsheet::Spreadsheet;

// Re-export core types
pub use mesa_sheets_core::{Cell, CellAddress, CellError, CellValue, Sheet, TextChange};

// Re-export the formula layer for direct expression evaluation
pub use mesa_sheets_formula::{ExpressionTree, FormulaError};
