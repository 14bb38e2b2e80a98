//! Cell value types and error sentinels

use std::fmt;

/// Represents the computed value of a cell
///
/// The value is written only by the recalculation engine; the raw user input
/// lives in the cell's text. A formula that fails validation or evaluation
/// leaves an [`CellError`] sentinel here instead of a result.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Numeric value
    Number(f64),

    /// Literal (non-numeric) text
    Text(String),

    /// Error sentinel (#REF!, #DIV/0!, etc.)
    Error(CellError),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell holds an error sentinel
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Error sentinels a cell value can hold
///
/// Every user-input failure mode of the formula pipeline maps to exactly one
/// sentinel. Error states are not sticky: the next edit re-enters validation
/// from scratch and can recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #SYNTAX! - Malformed formula text
    Syntax,
    /// #OP? - Operator not in the registry
    UnknownOperator,
    /// #PAREN! - Mismatched parentheses
    MismatchedParens,
    /// #SELFREF! - Formula references its own cell
    SelfReference,
    /// #REF! - Reference to a cell outside the grid
    BadReference,
    /// #CIRCULAR! - Formula would close a dependency cycle
    CircularReference,
    /// #DIV/0! - Division by zero
    Div0,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Syntax => "#SYNTAX!",
            CellError::UnknownOperator => "#OP?",
            CellError::MismatchedParens => "#PAREN!",
            CellError::SelfReference => "#SELFREF!",
            CellError::BadReference => "#REF!",
            CellError::CircularReference => "#CIRCULAR!",
            CellError::Div0 => "#DIV/0!",
        }
    }

    /// Parse an error sentinel string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "#SYNTAX!" => Some(CellError::Syntax),
            "#OP?" => Some(CellError::UnknownOperator),
            "#PAREN!" => Some(CellError::MismatchedParens),
            "#SELFREF!" => Some(CellError::SelfReference),
            "#REF!" => Some(CellError::BadReference),
            "#CIRCULAR!" => Some(CellError::CircularReference),
            "#DIV/0!" => Some(CellError::Div0),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Error(CellError::Div0).to_string(), "#DIV/0!");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_error_round_trip() {
        for err in [
            CellError::Syntax,
            CellError::UnknownOperator,
            CellError::MismatchedParens,
            CellError::SelfReference,
            CellError::BadReference,
            CellError::CircularReference,
            CellError::Div0,
        ] {
            assert_eq!(CellError::from_str(err.as_str()), Some(err));
        }
        assert_eq!(CellError::from_str("#VALUE!"), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::text("2.5").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }
}
