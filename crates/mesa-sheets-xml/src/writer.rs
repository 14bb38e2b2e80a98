//! Spreadsheet XML writer
//!
//! Serializes the changed cells of a sheet as a sparse document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <spreadsheet>
//!   <cell name="A1">
//!     <text>=B1+2</text>
//!   </cell>
//! </spreadsheet>
//! ```
//!
//! Only the raw text is persisted; values are recomputed on load.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use crate::error::XmlResult;
use mesa_sheets_core::Sheet;

/// Spreadsheet XML file writer
pub struct SheetWriter;

impl SheetWriter {
    /// Write a sheet's changed cells to a file path
    pub fn write_file<P: AsRef<Path>>(sheet: &Sheet, path: P) -> XmlResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, BufWriter::new(file))
    }

    /// Write a sheet's changed cells to a writer
    pub fn write<W: Write>(sheet: &Sheet, writer: W) -> XmlResult<()> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("spreadsheet")))?;

        let mut count = 0usize;
        for cell in sheet.changed_cells() {
            let mut cell_el = BytesStart::new("cell");
            cell_el.push_attribute(("name", cell.name()));
            xml.write_event(Event::Start(cell_el))?;

            xml.write_event(Event::Start(BytesStart::new("text")))?;
            xml.write_event(Event::Text(BytesText::new(cell.text())))?;
            xml.write_event(Event::End(BytesEnd::new("text")))?;

            xml.write_event(Event::End(BytesEnd::new("cell")))?;
            count += 1;
        }

        xml.write_event(Event::End(BytesEnd::new("spreadsheet")))?;
        log::debug!("wrote {} changed cells", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_sparse_document() {
        let mut sheet = Sheet::new(10, 5).unwrap();
        sheet.cell_mut(0, 0).unwrap().set_text("12");
        sheet.cell_mut(1, 1).unwrap().set_text("=A1*2");

        let mut out = Vec::new();
        SheetWriter::write(&sheet, &mut out).unwrap();
        let doc = String::from_utf8(out).unwrap();

        assert!(doc.contains(r#"<cell name="A1">"#));
        assert!(doc.contains("<text>12</text>"));
        assert!(doc.contains(r#"<cell name="B2">"#));
        assert!(doc.contains("<text>=A1*2</text>"));
        assert!(!doc.contains("C1"));
    }

    #[test]
    fn test_empty_sheet_writes_empty_root() {
        let sheet = Sheet::new(5, 5).unwrap();
        let mut out = Vec::new();
        SheetWriter::write(&sheet, &mut out).unwrap();
        let doc = String::from_utf8(out).unwrap();
        assert_eq!(doc.matches("<cell").count(), 0);
        assert!(doc.contains("<spreadsheet>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut sheet = Sheet::new(5, 5).unwrap();
        sheet.cell_mut(0, 0).unwrap().set_text("a<b&c");

        let mut out = Vec::new();
        SheetWriter::write(&sheet, &mut out).unwrap();
        let doc = String::from_utf8(out).unwrap();
        assert!(doc.contains("a&lt;b&amp;c"));
    }
}
