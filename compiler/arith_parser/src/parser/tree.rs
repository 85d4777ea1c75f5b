//! Postfix to expression-tree assembly.

use arith_ast::ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralNode, VariableNode,
};

use super::{ParseError, ParseResult};

/// Assembles a postfix token string into an expression tree.
///
/// Digits become `Literal` leaves, letters become `Variable` leaves, and
/// each operator combines the two most recently built nodes — the first
/// pop is the right operand, the second the left. `Paren` nodes are never
/// produced here: parentheses do not survive conversion to postfix.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when `postfix` holds no tokens.
///
/// # Panics
///
/// Panics when the token arity is wrong: an operator without two operands
/// on the stack, a character [`to_postfix`] could never emit, or more than
/// one node left over at the end. Postfix produced by `to_postfix` is
/// always well-formed, so hitting this means a defect in hand-crafted
/// input, and it fails loudly rather than returning a wrong tree.
///
/// [`to_postfix`]: super::to_postfix
pub fn expression_from_postfix(postfix: &str) -> ParseResult<ExpressionNode> {
    let mut stack: Vec<ExpressionNode> = Vec::new();

    for c in postfix.chars() {
        if c.is_ascii_digit() {
            stack.push(ExpressionNode::Literal(LiteralNode { value: c }));
        } else if c.is_ascii_alphabetic() {
            stack.push(ExpressionNode::Variable(VariableNode { name: c }));
        } else if let Some(operator) = BinaryOperator::from_char(c) {
            // The right operand was pushed most recently.
            let right = pop_operand(&mut stack, operator);
            let left = pop_operand(&mut stack, operator);
            stack.push(ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left,
                operator,
                right,
            })));
        } else {
            panic!("malformed postfix: {c:?} is not a postfix token");
        }
    }

    log::debug!("assembled {} node(s) from postfix {postfix:?}", stack.len());

    let Some(root) = stack.pop() else {
        return Err(ParseError::EmptyInput);
    };
    assert!(
        stack.is_empty(),
        "malformed postfix {postfix:?}: {} extra node(s) left unconsumed",
        stack.len()
    );
    Ok(root)
}

fn pop_operand(stack: &mut Vec<ExpressionNode>, operator: BinaryOperator) -> ExpressionNode {
    match stack.pop() {
        Some(node) => node,
        None => panic!("malformed postfix: operator '{operator}' is missing an operand"),
    }
}
