//! XML persistence error types

use thiserror::Error;

/// Result type for XML operations
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while saving or loading a spreadsheet document
#[derive(Debug, Error)]
pub enum XmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Document is not a spreadsheet file
    #[error("Invalid spreadsheet document: {0}")]
    InvalidFormat(String),
}
