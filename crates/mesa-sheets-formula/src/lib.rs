//! # mesa-sheets-formula
//!
//! Formula parsing, evaluation and dependency tracking for mesa-sheets.
//!
//! This crate provides:
//! - Tokenizing (text -> tokens) and shunting-yard reordering (infix -> postfix)
//! - The binary [`ExpressionTree`] with a per-tree variable binding map
//! - The statically initialized [`BinaryOp`] operator registry
//! - The name-keyed [`DependencyGraph`] used for cascading recalculation
//!
//! ## Example
//!
//! ```rust
//! use mesa_sheets_formula::ExpressionTree;
//!
//! let mut tree = ExpressionTree::new("A1*2+1")?;
//! tree.set_variable("A1", 3.0)?;
//! assert_eq!(tree.evaluate()?, 7.0);
//! # Ok::<(), mesa_sheets_formula::FormulaError>(())
//! ```

pub mod dependency;
pub mod error;
pub mod operator;
pub mod postfix;
pub mod token;
pub mod tree;

pub use dependency::DependencyGraph;
pub use error::{FormulaError, FormulaResult};
pub use operator::{Associativity, BinaryOp};
pub use postfix::to_postfix;
pub use token::{tokenize, Token};
pub use tree::{ExprNode, ExpressionTree};
