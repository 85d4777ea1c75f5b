//! Infix to postfix conversion via the shunting-yard algorithm.

use arith_ast::ast::BinaryOperator;

use super::{ParseError, ParseResult};

/// Converts an infix token string to postfix (reverse Polish) order.
///
/// Operand characters pass straight through to the output in their
/// original order; operators are reordered on a stack by precedence, and
/// parentheses are consumed entirely during conversion. An empty input
/// converts to an empty postfix string.
///
/// On success the returned string is well-formed postfix: balanced, with
/// two operands available for every operator. [`expression_from_postfix`]
/// relies on that and does not re-check it.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedChar`] for any character outside the
/// token alphabet, [`ParseError::UnmatchedCloseParen`] when a `)` has no
/// opening partner, [`ParseError::UnmatchedOpenParen`] when a `(` is still
/// unclosed at the end of input, and [`ParseError::MalformedExpression`]
/// when valid tokens appear in an order that cannot form an expression
/// (`12`, `1+`, `()`).
///
/// [`expression_from_postfix`]: super::expression_from_postfix
pub fn to_postfix(input: &str) -> ParseResult<String> {
    let mut output = String::with_capacity(input.len());
    let mut stack: Vec<char> = Vec::new();
    // Whether the next token must start an operand. Checking this as we go
    // is what lets a successful conversion guarantee operator arity to the
    // assembler.
    let mut expect_operand = true;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if !expect_operand {
                log::debug!("operand {c:?} follows a completed operand");
                return Err(ParseError::MalformedExpression);
            }
            // Operand tokens are emitted as-is, never reinterpreted.
            output.push(c);
            expect_operand = false;
        } else if let Some(op) = BinaryOperator::from_char(c) {
            if expect_operand {
                log::debug!("operator {c:?} has no left operand");
                return Err(ParseError::MalformedExpression);
            }
            // Popping on `>=` (not `>`) keeps equal-precedence operators
            // left-associative.
            while let Some(top) = stack.last().copied().and_then(BinaryOperator::from_char) {
                if top.precedence() >= op.precedence() {
                    stack.pop();
                    output.push(top.as_char());
                } else {
                    break;
                }
            }
            stack.push(c);
            expect_operand = true;
        } else if c == '(' {
            if !expect_operand {
                log::debug!("'(' follows a completed operand");
                return Err(ParseError::MalformedExpression);
            }
            stack.push(c);
        } else if c == ')' {
            if expect_operand {
                log::debug!("')' closes an incomplete group");
                return Err(ParseError::MalformedExpression);
            }
            loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => output.push(op),
                    None => {
                        log::debug!("')' with no matching '(' on the operator stack");
                        return Err(ParseError::UnmatchedCloseParen);
                    }
                }
            }
        } else {
            log::debug!("rejecting input on unrecognized character {c:?}");
            return Err(ParseError::UnrecognizedChar(c));
        }
    }

    if expect_operand && !output.is_empty() {
        log::debug!("input ended right after an operator");
        return Err(ParseError::MalformedExpression);
    }

    while let Some(c) = stack.pop() {
        if c == '(' {
            log::debug!("'(' still open at end of input");
            return Err(ParseError::UnmatchedOpenParen);
        }
        output.push(c);
    }

    Ok(output)
}
