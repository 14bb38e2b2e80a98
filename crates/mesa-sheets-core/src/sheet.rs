//! The cell grid
//!
//! A dense row-major grid of [`Cell`] objects. Lookups by name go through
//! [`CellAddress::parse`], so a syntactically valid name outside the grid's
//! dimensions resolves to `None` the same way a malformed one does.

use crate::address::CellAddress;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A 2D grid of cells
#[derive(Debug, Clone)]
pub struct Sheet {
    rows: u32,
    cols: u16,
    cells: Vec<Cell>,
}

impl Sheet {
    /// Create a grid with the given dimensions
    ///
    /// Columns are capped at 26 because cell names carry a single letter.
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        if rows > MAX_ROWS {
            return Err(Error::RowOutOfBounds(rows - 1, MAX_ROWS - 1));
        }
        if cols > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(cols - 1, MAX_COLS - 1));
        }

        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    fn index(&self, row: u32, col: u16) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// Get a cell by coordinates
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Get a mutable cell by coordinates
    pub fn cell_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.index(row, col).map(move |i| &mut self.cells[i])
    }

    /// Get a cell by name, e.g. "B12"
    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        let addr = CellAddress::parse(name).ok()?;
        self.cell(addr.row, addr.col)
    }

    /// Get a mutable cell by name
    pub fn cell_by_name_mut(&mut self, name: &str) -> Option<&mut Cell> {
        let addr = CellAddress::parse(name).ok()?;
        self.cell_mut(addr.row, addr.col)
    }

    /// Whether a name resolves to a cell inside this grid
    pub fn contains_name(&self, name: &str) -> bool {
        self.cell_by_name(name).is_some()
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over cells with non-default text or value, for sparse export
    pub fn changed_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.is_default())
    }

    /// Reset every cell to its default state
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::new(cell.row(), cell.col());
        }
    }
}
