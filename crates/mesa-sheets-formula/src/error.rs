//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing or evaluating a formula
///
/// All variants here are user-input errors; the recalculation engine maps
/// them to cell value sentinels at the cell boundary. Internal invariant
/// violations (malformed postfix, missing self-created bindings) panic
/// instead, since they indicate a parser bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Malformed formula text
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Operator token not present in the registry
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(char),

    /// Unbalanced parentheses
    #[error("Mismatched parentheses")]
    MismatchedParens,

    /// Division by zero during evaluation
    #[error("Division by zero")]
    DivisionByZero,

    /// `set_variable`/`get_variable` on a name the formula never referenced
    #[error("Variable not found: '{0}'")]
    VariableNotFound(String),
}
