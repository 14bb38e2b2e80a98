//! XML persistence for mesa-sheets documents
//!
//! Reads and writes a sparse XML format: only cells whose text differs from
//! the default are stored, each as a `<cell>` element carrying the raw text.
//! Computed values are never serialized.

mod error;
mod reader;
mod writer;

pub use error::{XmlError, XmlResult};
pub use reader::{LoadedCell, SheetReader};
pub use writer::SheetWriter;
