//! Abstract Syntax Tree (AST) for the Arith expression language.
//!
//! This crate defines the tree nodes produced by the expression parser,
//! along with the visitor used to traverse them and JSON helpers for
//! tooling.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::ExpressionNode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST utility operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use arith_ast::ast::{ExpressionNode, LiteralNode};
/// use arith_ast::to_json;
///
/// let expr = ExpressionNode::Literal(LiteralNode { value: '4' });
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("Literal"));
/// assert!(json.contains('4'));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn test_serialization_round_trip() -> Result<()> {
        let expr = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left: ExpressionNode::Literal(LiteralNode { value: '1' }),
            operator: BinaryOperator::Add,
            right: ExpressionNode::Variable(VariableNode { name: 'a' }),
        }));

        let json = to_json(&expr)?;
        let deserialized: ExpressionNode = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }
}
