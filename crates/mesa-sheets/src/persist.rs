//! Saving and loading spreadsheets
//!
//! Only cell text is persisted; loading replays each entry through the edit
//! pipeline, so formulas re-validate and recompute against the fresh grid.
//! Entries naming cells outside the grid are logged and skipped.

use std::io::{BufRead, Write};
use std::path::Path;

use mesa_sheets_xml::{SheetReader, SheetWriter};

use crate::error::{Error, Result};
use crate::spreadsheet::Spreadsheet;

impl Spreadsheet {
    /// Save the sheet's non-default cells to an XML file
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        SheetWriter::write_file(self.sheet(), path)?;
        Ok(())
    }

    /// Save the sheet's non-default cells as XML
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        SheetWriter::write(self.sheet(), writer)?;
        Ok(())
    }

    /// Replace the sheet's contents with those of an XML file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let cells = SheetReader::read_file(path)?;
        self.replay(cells)
    }

    /// Replace the sheet's contents with those of an XML document
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let cells = SheetReader::read(reader)?;
        self.replay(cells)
    }

    fn replay(&mut self, cells: Vec<mesa_sheets_xml::LoadedCell>) -> Result<()> {
        self.clear();
        for cell in cells {
            match self.set_text(&cell.name, &cell.text) {
                Ok(()) => {}
                Err(Error::UnknownCell(name)) => {
                    log::warn!("load: skipping '{}', outside the grid", name);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
