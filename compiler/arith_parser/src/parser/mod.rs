//! Expression parsing for the Arith language.
//!
//! Parsing runs in two stages: [`to_postfix`] converts the infix token
//! string to postfix order with the shunting-yard algorithm, and
//! [`expression_from_postfix`] assembles that postfix string into an
//! [`ExpressionNode`] tree. [`parse_expression`] composes the two and is
//! the entry point consumers want; `to_postfix` stays public for
//! diagnostics.

mod postfix;
mod tree;

pub use postfix::to_postfix;
pub use tree::expression_from_postfix;

use arith_ast::ast::ExpressionNode;

/// The result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A malformed-input failure.
///
/// Every variant here is an expected, caller-facing condition and is
/// returned, never panicked. Arity defects in hand-crafted postfix input
/// are a different failure class; see [`expression_from_postfix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained a character that is not a digit, a letter, an
    /// operator, or a parenthesis.
    #[error("unrecognized character '{0}' in expression")]
    UnrecognizedChar(char),
    /// A `(` was never closed.
    #[error("unmatched opening parenthesis")]
    UnmatchedOpenParen,
    /// A `)` had no opening partner.
    #[error("unmatched closing parenthesis")]
    UnmatchedCloseParen,
    /// The tokens are individually valid but out of order: two adjacent
    /// operands, an operator missing an operand, or an empty group.
    #[error("malformed expression")]
    MalformedExpression,
    /// The input held no tokens to assemble.
    #[error("empty expression")]
    EmptyInput,
}

/// Parses an infix expression string into an expression tree.
///
/// Tokens are single characters: digits become [`Literal`] leaves, letters
/// become [`Variable`] leaves, and `+`, `-`, `*` combine sub-expressions
/// with the usual precedence (`*` binds tighter, ties resolve to the
/// left). Parentheses group sub-expressions during conversion and do not
/// appear in the resulting tree.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is malformed: an unrecognized
/// character, an unmatched parenthesis on either side, tokens out of
/// order, or no tokens at all.
///
/// [`Literal`]: arith_ast::ast::ExpressionNode::Literal
/// [`Variable`]: arith_ast::ast::ExpressionNode::Variable
pub fn parse_expression(input: &str) -> ParseResult<ExpressionNode> {
    let postfix = to_postfix(input)?;
    log::debug!("parsing {input:?}: postfix form is {postfix:?}");
    expression_from_postfix(&postfix)
}
