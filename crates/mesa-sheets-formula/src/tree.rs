//! Expression tree construction and evaluation
//!
//! [`ExpressionTree`] runs the full parse pipeline (tokenize, reorder to
//! postfix, build the tree), owns the name-to-value binding map, and
//! evaluates recursively. Every variable the formula references is a key of
//! the binding map, defaulted to 0.0 at construction.

use crate::error::{FormulaError, FormulaResult};
use crate::operator::BinaryOp;
use crate::postfix::to_postfix;
use crate::token::{tokenize, Token};
use ahash::AHashMap;
use std::collections::HashSet;

/// A node of the binary expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// Numeric constant leaf
    Constant(f64),
    /// Variable leaf; the value comes from the owning tree's binding map
    Variable(String),
    /// Binary operator with exactly two owned children
    Operator {
        op: BinaryOp,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    fn evaluate(&self, bindings: &AHashMap<String, f64>) -> FormulaResult<f64> {
        match self {
            ExprNode::Constant(value) => Ok(*value),
            ExprNode::Variable(name) => {
                // The tree created this binding at construction time; a miss
                // is a builder bug, not user input.
                let value = bindings
                    .get(name)
                    .unwrap_or_else(|| panic!("variable '{}' missing from binding map", name));
                Ok(*value)
            }
            ExprNode::Operator { op, left, right } => {
                let left = left.evaluate(bindings)?;
                let right = right.evaluate(bindings)?;
                op.apply(left, right)
            }
        }
    }
}

/// Build a tree from a postfix token sequence
///
/// The first pop becomes the right child, the second the left; order matters
/// for subtraction and division. Malformed postfix (underflow or leftover
/// nodes) panics: the converter guarantees well-formed output, so this is an
/// internal invariant, not a user error.
fn build_tree(postfix: Vec<Token>) -> ExprNode {
    let mut stack: Vec<ExprNode> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(ExprNode::Constant(value)),
            Token::Reference(name) => stack.push(ExprNode::Variable(name)),
            Token::Operator(symbol) => {
                let op = BinaryOp::lookup(symbol)
                    .unwrap_or_else(|_| panic!("unregistered operator '{}' in postfix", symbol));
                let right = stack.pop().expect("postfix underflow: missing right operand");
                let left = stack.pop().expect("postfix underflow: missing left operand");
                stack.push(ExprNode::Operator {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                });
            }
            Token::LeftParen | Token::RightParen => {
                panic!("parenthesis token survived postfix conversion")
            }
        }
    }

    let root = stack.pop().expect("postfix produced no root node");
    assert!(stack.is_empty(), "postfix left extra nodes on the stack");
    root
}

/// A parsed formula with its variable bindings
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    formula: String,
    root: ExprNode,
    bindings: AHashMap<String, f64>,
}

impl ExpressionTree {
    /// Parse a formula (without the leading '=') into an expression tree
    ///
    /// Whitespace is stripped before tokenizing. Every referenced variable
    /// is defaulted to 0.0 in the binding map.
    pub fn new(formula: &str) -> FormulaResult<Self> {
        let stripped: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
        let tokens = tokenize(&stripped)?;

        let mut bindings = AHashMap::new();
        for token in &tokens {
            if let Token::Reference(name) = token {
                bindings.entry(name.clone()).or_insert(0.0);
            }
        }

        let root = build_tree(to_postfix(tokens)?);

        Ok(Self {
            formula: formula.to_string(),
            root,
            bindings,
        })
    }

    /// The source formula string
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Bind a referenced variable to a value
    pub fn set_variable(&mut self, name: &str, value: f64) -> FormulaResult<()> {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FormulaError::VariableNotFound(name.to_string())),
        }
    }

    /// Read a variable's current binding
    pub fn get_variable(&self, name: &str) -> FormulaResult<f64> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| FormulaError::VariableNotFound(name.to_string()))
    }

    /// The set of variable names the formula references
    pub fn variables(&self) -> HashSet<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Evaluate the tree against the current bindings
    ///
    /// Pure with respect to the binding map: repeated calls with unchanged
    /// bindings yield identical results.
    pub fn evaluate(&self) -> FormulaResult<f64> {
        self.root.evaluate(&self.bindings)
    }
}
