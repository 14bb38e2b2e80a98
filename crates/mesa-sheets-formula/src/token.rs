//! Formula tokenizer
//!
//! Splits a formula string (whitespace already stripped by the caller) into
//! an ordered token sequence. A run starting with a letter consumes letters
//! and digits as one reference; a run starting with a digit consumes digits
//! as one number; `+ - * / ( )` are single-character tokens.

use crate::error::{FormulaError, FormulaResult};

/// A single formula token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric constant
    Number(f64),
    /// Cell reference used as a variable, e.g. "B12"
    Reference(String),
    /// Binary operator symbol
    Operator(char),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Whether this token is an operand (number or reference)
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Reference(_))
    }
}

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/'];

/// Tokenize a formula string
///
/// Fewer than three tokens is rejected unless the result is exactly one
/// operand: a bare reference or constant is a valid whole formula, while a
/// dangling two-token form like "A1+" never is.
pub fn tokenize(expression: &str) -> FormulaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphabetic() {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Reference(name));
        } else if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    chars.next();
                } else if c.is_ascii_alphabetic() {
                    // "4C" style runs: a variable may not start with a digit
                    return Err(FormulaError::Syntax(
                        "variables must start with a letter, not a digit".into(),
                    ));
                } else {
                    break;
                }
            }
            let value: f64 = digits
                .parse()
                .map_err(|_| FormulaError::Syntax(format!("invalid number '{}'", digits)))?;
            tokens.push(Token::Number(value));
        } else if OPERATOR_CHARS.contains(&c) {
            chars.next();
            tokens.push(Token::Operator(c));
        } else if c == '(' {
            chars.next();
            tokens.push(Token::LeftParen);
        } else if c == ')' {
            chars.next();
            tokens.push(Token::RightParen);
        } else {
            return Err(FormulaError::Syntax(format!("unknown token '{}'", c)));
        }
    }

    match tokens.len() {
        0 => Err(FormulaError::Syntax("empty expression".into())),
        1 if tokens[0].is_operand() => Ok(tokens),
        1 => Err(FormulaError::Syntax(
            "a one-token expression must be an operand".into(),
        )),
        2 => Err(FormulaError::Syntax(
            "expression must have an operator and two operands, or a single operand".into(),
        )),
        _ => Ok(tokens),
    }
}
