//! The cell type
//!
//! A cell pairs the raw user input (text) with the computed value. Text edits
//! are reported back to the caller as an explicit [`TextChange`] record; the
//! recalculation engine consumes that record to retract and rebuild
//! dependency edges. The value is only ever written by the engine.

use crate::address::CellAddress;
use crate::value::CellValue;

/// A single cell of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    address: CellAddress,
    name: String,
    text: String,
    value: CellValue,
}

/// Record of a text edit, returned by [`Cell::set_text`]
///
/// Carries both sides of the edit so the engine can retract edges for the
/// old formula before validating the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChange {
    pub old: String,
    pub new: String,
}

impl TextChange {
    /// Whether the replaced text was a formula
    pub fn old_is_formula(&self) -> bool {
        self.old.starts_with('=')
    }
}

impl Cell {
    /// Create an empty cell at the given coordinates
    pub fn new(row: u32, col: u16) -> Self {
        let address = CellAddress::new(row, col);
        Self {
            name: address.name(),
            address,
            text: String::new(),
            value: CellValue::Empty,
        }
    }

    /// Row index (0-based)
    pub fn row(&self) -> u32 {
        self.address.row
    }

    /// Column index (0-based)
    pub fn col(&self) -> u16 {
        self.address.col
    }

    /// The cell's address
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// The cell's stable name, e.g. "A1"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw user input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the current text is a formula (starts with '=')
    pub fn is_formula(&self) -> bool {
        self.text.starts_with('=')
    }

    /// The computed value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Store new text, returning the change record
    ///
    /// A no-op returning `None` when the new text equals the current text.
    pub fn set_text<S: Into<String>>(&mut self, text: S) -> Option<TextChange> {
        let new = text.into();
        if new == self.text {
            return None;
        }
        let old = std::mem::replace(&mut self.text, new.clone());
        Some(TextChange { old, new })
    }

    /// Store a computed value, returning whether it actually changed
    ///
    /// Only the recalculation engine calls this.
    pub fn set_value(&mut self, value: CellValue) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Whether both text and value are at their defaults
    pub fn is_default(&self) -> bool {
        self.text.is_empty() && self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_derivation() {
        assert_eq!(Cell::new(0, 0).name(), "A1");
        assert_eq!(Cell::new(11, 2).name(), "C12");
    }

    #[test]
    fn test_set_text_no_op() {
        let mut cell = Cell::new(0, 0);
        assert!(cell.set_text("").is_none());

        let change = cell.set_text("=A2").unwrap();
        assert_eq!(change.old, "");
        assert_eq!(change.new, "=A2");
        assert!(!change.old_is_formula());

        assert!(cell.set_text("=A2").is_none());

        let change = cell.set_text("=B2").unwrap();
        assert!(change.old_is_formula());
        assert_eq!(change.old, "=A2");
    }

    #[test]
    fn test_set_value_reports_change() {
        let mut cell = Cell::new(0, 0);
        assert!(cell.set_value(CellValue::Number(1.0)));
        assert!(!cell.set_value(CellValue::Number(1.0)));
        assert!(cell.set_value(CellValue::Empty));
    }

    #[test]
    fn test_is_default() {
        let mut cell = Cell::new(3, 3);
        assert!(cell.is_default());
        cell.set_text("5");
        assert!(!cell.is_default());
        cell.set_text("");
        cell.set_value(CellValue::Empty);
        assert!(cell.is_default());
    }
}
