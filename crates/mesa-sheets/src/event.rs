//! Change notifications
//!
//! Every committed value change is recorded as a [`CellChange`] in a queue
//! the caller drains after an edit. The queue replaces callback-style
//! observers: a UI layer polls it once per edit and repaints exactly the
//! cells named.

/// What kind of value a change produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The cell now holds an ordinary value (number, text, or empty)
    Value,
    /// The cell now holds an error sentinel
    Error,
}

/// A single committed value change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    /// Name of the changed cell, e.g. "B4"
    pub name: String,
    /// Whether the new value is an error sentinel
    pub kind: ChangeKind,
}

impl CellChange {
    pub(crate) fn new(name: &str, is_error: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: if is_error {
                ChangeKind::Error
            } else {
                ChangeKind::Value
            },
        }
    }
}
