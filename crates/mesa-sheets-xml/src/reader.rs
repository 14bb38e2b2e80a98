//! Spreadsheet XML reader
//!
//! Parses the sparse document produced by the writer back into (name, text)
//! pairs. Values are not read from the file; the engine recomputes them by
//! replaying each cell's text. Unknown elements are skipped, and a `cell`
//! element without a `name` attribute is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XmlError, XmlResult};

/// A cell entry read back from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCell {
    /// Cell name, e.g. "A1"
    pub name: String,
    /// Raw cell text (may be a formula)
    pub text: String,
}

/// Spreadsheet XML file reader
pub struct SheetReader;

impl SheetReader {
    /// Read cell entries from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XmlResult<Vec<LoadedCell>> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read cell entries from a reader
    pub fn read<R: BufRead>(reader: R) -> XmlResult<Vec<LoadedCell>> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut cells = Vec::new();
        let mut saw_root = false;
        let mut current_name: Option<String> = None;
        let mut current_text = String::new();
        let mut in_text = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"spreadsheet" => saw_root = true,
                    b"cell" => {
                        current_name = match e.try_get_attribute("name")? {
                            Some(attr) => Some(attr.unescape_value()?.into_owned()),
                            None => {
                                log::warn!("skipping cell element without a name attribute");
                                None
                            }
                        };
                        current_text.clear();
                    }
                    b"text" if current_name.is_some() => in_text = true,
                    other => {
                        log::debug!(
                            "skipping unknown element '{}'",
                            String::from_utf8_lossy(other)
                        );
                    }
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"cell" => {
                        if let Some(name) = current_name.take() {
                            cells.push(LoadedCell {
                                name,
                                text: std::mem::take(&mut current_text),
                            });
                        }
                    }
                    b"text" => in_text = false,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"spreadsheet" => {
                    saw_root = true;
                }
                Ok(Event::Text(e)) if in_text => {
                    current_text.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if !saw_root {
            return Err(XmlError::InvalidFormat(
                "missing <spreadsheet> root element".into(),
            ));
        }

        log::debug!("loaded {} cell entries", cells.len());
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded(name: &str, text: &str) -> LoadedCell {
        LoadedCell {
            name: name.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_read_basic_document() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<spreadsheet>
  <cell name="A1"><text>12</text></cell>
  <cell name="B2"><text>=A1*2</text></cell>
</spreadsheet>"#;

        let cells = SheetReader::read(doc.as_bytes()).unwrap();
        assert_eq!(cells, vec![loaded("A1", "12"), loaded("B2", "=A1*2")]);
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let doc = r#"<spreadsheet>
  <meta><author>nobody</author></meta>
  <cell name="A1"><text>5</text><bgcolor>FFFFFFFF</bgcolor></cell>
</spreadsheet>"#;

        let cells = SheetReader::read(doc.as_bytes()).unwrap();
        assert_eq!(cells, vec![loaded("A1", "5")]);
    }

    #[test]
    fn test_nameless_cell_ignored() {
        let doc = r#"<spreadsheet>
  <cell><text>5</text></cell>
  <cell name="B1"><text>7</text></cell>
</spreadsheet>"#;

        let cells = SheetReader::read(doc.as_bytes()).unwrap();
        assert_eq!(cells, vec![loaded("B1", "7")]);
    }

    #[test]
    fn test_escaped_text_unescaped() {
        let doc = r#"<spreadsheet><cell name="A1"><text>a&lt;b&amp;c</text></cell></spreadsheet>"#;
        let cells = SheetReader::read(doc.as_bytes()).unwrap();
        assert_eq!(cells, vec![loaded("A1", "a<b&c")]);
    }

    #[test]
    fn test_missing_root_rejected() {
        let doc = r#"<other><cell name="A1"><text>5</text></cell></other>"#;
        assert!(matches!(
            SheetReader::read(doc.as_bytes()),
            Err(XmlError::InvalidFormat(_))
        ));
    }
}
