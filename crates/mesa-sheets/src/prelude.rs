//! Prelude module - common imports for mesa-sheets users
//!
//! ```rust
//! use mesa_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    // Notifications
    CellChange,
    CellError,
    CellValue,
    ChangeKind,
    // Error types
    Error,
    // Formula layer
    ExpressionTree,
    FormulaError,
    Result,
    Sheet,
    // Main type
    Spreadsheet,
    TextChange,
};
