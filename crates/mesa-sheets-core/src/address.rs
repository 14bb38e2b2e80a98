//! Cell addressing
//!
//! The engine names cells with a single uppercase column letter followed by a
//! 1-based row number: "A1" is row 0, column 0. Formula references use the
//! same notation, so parsing here doubles as reference resolution.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C12")
///
/// Rows and columns are 0-based internally; the display form uses A-Z for the
/// column and a 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0 .. Z=25)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell name in A1 notation
    ///
    /// # Examples
    /// ```
    /// use mesa_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// assert!(CellAddress::parse("AA1").is_err());
    /// assert!(CellAddress::parse("B0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidName("empty name".into()))?;
        if !letter.is_ascii_uppercase() {
            return Err(Error::InvalidName(format!(
                "'{}' must start with an uppercase column letter",
                s
            )));
        }

        let col = (letter as u8 - b'A') as u16;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidName(format!("invalid row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidName(format!("invalid row number in '{}'", s)))?;

        // Display rows are 1-based, we use 0-based internally
        if row == 0 {
            return Err(Error::InvalidName(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(Self { row, col })
    }

    /// Format as an A1-style name
    pub fn name(&self) -> String {
        format!("{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
