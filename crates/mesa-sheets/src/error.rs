//! Error types for the spreadsheet engine
//!
//! Formula problems never surface here: they become error sentinels in the
//! affected cell's value. This type covers the structural failures only,
//! like addressing a cell outside the grid or an I/O failure during
//! persistence.

use thiserror::Error;

/// Spreadsheet engine errors
#[derive(Debug, Error)]
pub enum Error {
    /// A cell name that does not resolve inside this sheet
    #[error("no cell named '{0}' in this sheet")]
    UnknownCell(String),

    /// Grid construction or addressing error
    #[error(transparent)]
    Core(#[from] mesa_sheets_core::Error),

    /// XML persistence error
    #[error(transparent)]
    Xml(#[from] mesa_sheets_xml::XmlError),
}

/// Result type for spreadsheet operations
pub type Result<T> = std::result::Result<T, Error>;
