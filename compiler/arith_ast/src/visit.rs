//! Visitor pattern implementation for traversing the expression tree.
//!
//! `Visitor` declares one handler per node variant and `Visitable::accept`
//! dispatches to the matching handler. The variant set is closed, so the
//! dispatch is a plain `match` — no virtual calls involved.

use crate::ast::{
    BinaryExpressionNode, ExpressionNode, LiteralNode, ParenExpressionNode, VariableNode,
};

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a [`Visitor`].
pub trait Visitable {
    /// Accepts a visitor and calls the handler for the matching variant.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;
}

/// A visitor over the expression tree.
///
/// Implementors supply one handler per variant. A handler receives its node
/// and decides itself whether and how to descend into the children via
/// [`Visitable::accept`]; for binary nodes the conventional order is left
/// child, operator, right child.
pub trait Visitor {
    /// The output produced for each visited node.
    type Output;

    fn visit_literal(&mut self, node: &LiteralNode) -> VisitResult<Self::Output>;

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult<Self::Output>;

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output>;

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<Self::Output>;
}

/// Renders an expression tree in its canonical bracketed form:
/// `Literal(v)`, `Variable(n)`, `Binary(L<op>R)`, `Paren(O)`, with no extra
/// whitespace.
///
/// The output is built as a pure fold: every handler returns the finished
/// fragment for its subtree, so the printer itself carries no state and
/// printing the same tree twice yields identical strings.
///
/// ```
/// use arith_ast::ast::{ExpressionNode, LiteralNode};
/// use arith_ast::visit::ExpressionPrinter;
///
/// let expr = ExpressionNode::Literal(LiteralNode { value: '7' });
/// assert_eq!(ExpressionPrinter::print(&expr).unwrap(), "Literal(7)");
/// ```
pub struct ExpressionPrinter;

impl ExpressionPrinter {
    /// Renders `expr` and returns the finished string.
    pub fn print(expr: &ExpressionNode) -> VisitResult<String> {
        expr.accept(&mut ExpressionPrinter)
    }
}

impl Visitor for ExpressionPrinter {
    type Output = String;

    fn visit_literal(&mut self, node: &LiteralNode) -> VisitResult<String> {
        Ok(format!("Literal({})", node.value))
    }

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult<String> {
        Ok(format!("Variable({})", node.name))
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<String> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        Ok(format!("Binary({left}{}{right})", node.operator))
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<String> {
        let operand = node.operand.accept(self)?;
        Ok(format!("Paren({operand})"))
    }
}
