//! AST node definitions for the Arith expression language.
//!
//! An expression is a finite, acyclic, strictly-owned tree: every node owns
//! its children exclusively, nothing is shared or back-referenced, and the
//! whole tree is dropped as a unit together with its root.

use std::fmt;

use crate::visit::{Visitable, VisitResult, Visitor};

/// A single node of the expression tree.
///
/// The variant set is closed. Consumers traverse a tree either by matching
/// on it directly or through the [`Visitor`] trait.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNode {
    /// A single-digit literal leaf.
    Literal(LiteralNode),
    /// A single-letter identifier leaf.
    Variable(VariableNode),
    /// A binary operation with exactly two children.
    Binary(Box<BinaryExpressionNode>),
    /// A parenthesized sub-expression with exactly one child.
    ///
    /// Never produced by the parser: parentheses are consumed while
    /// converting to postfix and leave no trace in the output. The variant
    /// exists for consumers that build trees by hand.
    Paren(Box<ParenExpressionNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralNode {
    pub value: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableNode {
    pub name: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParenExpressionNode {
    pub operand: ExpressionNode,
}

/// The closed set of binary operators.
///
/// This enum doubles as the operator table: token lookup and precedence are
/// `const fn` match tables, shared by every parser call, never rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
}

impl BinaryOperator {
    /// Looks up the operator for a token character.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Sub),
            '*' => Some(BinaryOperator::Mul),
            _ => None,
        }
    }

    /// The token character this operator is written as.
    pub const fn as_char(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
        }
    }

    /// Binding strength: `+` and `-` share level 0, `*` binds tighter at 1.
    /// Equal levels are resolved left-to-right.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 0,
            BinaryOperator::Mul => 1,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Renders the expression back as infix text, keeping explicit parentheses
/// only where a `Paren` node records them.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Literal(lit) => write!(f, "{}", lit.value),
            ExpressionNode::Variable(var) => write!(f, "{}", var.name),
            ExpressionNode::Binary(bin) => {
                write!(f, "{}{}{}", bin.left, bin.operator, bin.right)
            }
            ExpressionNode::Paren(paren) => write!(f, "({})", paren.operand),
        }
    }
}

// Visitor dispatch lives here with the type definitions; the traits
// themselves are declared in `visit`.
impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Literal(node) => visitor.visit_literal(node),
            ExpressionNode::Variable(node) => visitor.visit_variable(node),
            ExpressionNode::Binary(node) => visitor.visit_binary_expr(node),
            ExpressionNode::Paren(node) => visitor.visit_paren_expr(node),
        }
    }
}
