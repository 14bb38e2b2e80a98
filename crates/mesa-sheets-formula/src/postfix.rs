//! Infix to postfix conversion (shunting-yard)
//!
//! Reorders an infix token sequence into postfix using the operator
//! registry. All registered operators are left-associative, so precedence
//! ties always pop.

use crate::error::{FormulaError, FormulaResult};
use crate::operator::BinaryOp;
use crate::token::Token;

/// Entries on the shunting-yard operator stack
enum StackEntry {
    Op(BinaryOp),
    ParenMarker,
}

/// Convert an infix token sequence into postfix order
pub fn to_postfix(tokens: Vec<Token>) -> FormulaResult<Vec<Token>> {
    // Mirrors the tokenizer's shape rule for sequences built by hand
    if tokens.is_empty() || tokens.len() == 2 {
        return Err(FormulaError::Syntax(
            "expression must have an operator and two operands, or a single operand".into(),
        ));
    }

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Reference(_) => output.push(token),
            Token::Operator(symbol) => {
                let op = BinaryOp::lookup(symbol)?;
                while let Some(StackEntry::Op(top)) = stack.last() {
                    if top.precedence() >= op.precedence() {
                        output.push(Token::Operator(top.symbol()));
                        stack.pop();
                    } else {
                        break;
                    }
                }
                stack.push(StackEntry::Op(op));
            }
            Token::LeftParen => stack.push(StackEntry::ParenMarker),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op(op)) => output.push(Token::Operator(op.symbol())),
                    Some(StackEntry::ParenMarker) => break,
                    None => return Err(FormulaError::MismatchedParens),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(Token::Operator(op.symbol())),
            StackEntry::ParenMarker => return Err(FormulaError::MismatchedParens),
        }
    }

    check_arity(&output)?;
    Ok(output)
}

/// Verify the postfix sequence builds exactly one tree
///
/// Inputs like "1+2+" or "(1)(2)" tokenize and reorder fine but leave the
/// tree builder's stack unbalanced; they are user errors and must be caught
/// here so the builder's underflow stays an internal invariant.
fn check_arity(postfix: &[Token]) -> FormulaResult<()> {
    let mut operands = 0usize;
    for token in postfix {
        match token {
            Token::Number(_) | Token::Reference(_) => operands += 1,
            Token::Operator(_) => {
                if operands < 2 {
                    return Err(FormulaError::Syntax("operator is missing an operand".into()));
                }
                operands -= 1;
            }
            Token::LeftParen | Token::RightParen => unreachable!("paren survived conversion"),
        }
    }
    if operands != 1 {
        return Err(FormulaError::Syntax(
            "expression does not reduce to a single value".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;
    use pretty_assertions::assert_eq;

    fn postfix_of(expr: &str) -> Vec<String> {
        to_postfix(tokenize(expr).unwrap())
            .unwrap()
            .iter()
            .map(|t| match t {
                Token::Number(n) => n.to_string(),
                Token::Reference(name) => name.clone(),
                Token::Operator(op) => op.to_string(),
                Token::LeftParen => "(".into(),
                Token::RightParen => ")".into(),
            })
            .collect()
    }

    #[test]
    fn test_precedence_reordering() {
        assert_eq!(postfix_of("A1+B1*C1"), vec!["A1", "B1", "C1", "*", "+"]);
        assert_eq!(postfix_of("A1*B1+C1"), vec!["A1", "B1", "*", "C1", "+"]);
    }

    #[test]
    fn test_left_associative_ties_pop() {
        assert_eq!(postfix_of("A1-B1-C1"), vec!["A1", "B1", "-", "C1", "-"]);
        assert_eq!(postfix_of("A1/B1*C1"), vec!["A1", "B1", "/", "C1", "*"]);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix_of("(A1+B1)*C1"), vec!["A1", "B1", "+", "C1", "*"]);
        assert_eq!(
            postfix_of("(A+5)*(B-10)"),
            vec!["A", "5", "+", "B", "10", "-", "*"]
        );
    }

    #[test]
    fn test_operator_after_right_paren() {
        // Standard algorithm handles ")*" without special casing
        assert_eq!(
            postfix_of("(1+2)*(3+4)"),
            vec!["1", "2", "+", "3", "4", "+", "*"]
        );
    }

    #[test]
    fn test_mismatched_parens() {
        let tokens = tokenize("(A1+B1").unwrap();
        assert_eq!(to_postfix(tokens).unwrap_err(), FormulaError::MismatchedParens);

        let tokens = tokenize("A1+B1)").unwrap();
        assert_eq!(to_postfix(tokens).unwrap_err(), FormulaError::MismatchedParens);
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let tokens = vec![
            Token::Number(1.0),
            Token::Operator('%'),
            Token::Number(2.0),
        ];
        assert_eq!(
            to_postfix(tokens).unwrap_err(),
            FormulaError::UnknownOperator('%')
        );
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(to_postfix(vec![]).is_err());
        assert!(to_postfix(vec![Token::Reference("A1".into()), Token::Operator('+')]).is_err());
    }

    #[test]
    fn test_arity_violations_rejected() {
        let tokens = tokenize("1+2+3+").unwrap();
        assert!(matches!(
            to_postfix(tokens).unwrap_err(),
            FormulaError::Syntax(_)
        ));

        let tokens = tokenize("(1)(2)").unwrap();
        assert!(matches!(
            to_postfix(tokens).unwrap_err(),
            FormulaError::Syntax(_)
        ));

        let tokens = tokenize("1+*2").unwrap();
        assert!(matches!(
            to_postfix(tokens).unwrap_err(),
            FormulaError::Syntax(_)
        ));
    }

    #[test]
    fn test_single_operand_passthrough() {
        assert_eq!(postfix_of("B12"), vec!["B12"]);
    }
}
