//! Binary operator registry
//!
//! An explicit, statically initialized symbol-to-descriptor table. The
//! engine defines four left-associative arithmetic operators; the registry
//! is built once and never mutated.

use crate::error::{FormulaError, FormulaResult};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Operator associativity (no right-associative operator is defined)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
}

/// A binary operator descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

static REGISTRY: Lazy<AHashMap<char, BinaryOp>> = Lazy::new(|| {
    let mut ops = AHashMap::new();
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        ops.insert(op.symbol(), op);
    }
    ops
});

impl BinaryOp {
    /// Look up an operator by its symbol
    pub fn lookup(symbol: char) -> FormulaResult<Self> {
        REGISTRY
            .get(&symbol)
            .copied()
            .ok_or(FormulaError::UnknownOperator(symbol))
    }

    /// The operator's source symbol
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Precedence level; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// All four operators are left-associative
    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    /// Apply the operator to two evaluated operands
    ///
    /// Division by zero is an error; an overflowing result saturates to the
    /// largest finite f64 instead of going infinite, so downstream cells
    /// stay computable.
    pub fn apply(&self, left: f64, right: f64) -> FormulaResult<f64> {
        let result = match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => {
                if right == 0.0 {
                    return Err(FormulaError::DivisionByZero);
                }
                left / right
            }
        };
        Ok(saturate(result))
    }
}

fn saturate(value: f64) -> f64 {
    if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}
