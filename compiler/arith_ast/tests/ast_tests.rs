use arith_ast::ast::*;
use arith_ast::visit::{ExpressionPrinter, Visitable, VisitResult, Visitor};
use pretty_assertions::assert_eq;

/// A test visitor that counts the number of nodes visited
struct NodeCounter {
    count: usize,
}

impl NodeCounter {
    fn new() -> Self {
        NodeCounter { count: 0 }
    }
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralNode) -> VisitResult<()> {
        self.count += 1;
        Ok(())
    }

    fn visit_variable(&mut self, _node: &VariableNode) -> VisitResult<()> {
        self.count += 1;
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<()> {
        self.count += 1;
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<()> {
        self.count += 1;
        node.operand.accept(self)
    }
}

#[test]
fn test_leaf_node_visitor() {
    let expr = ExpressionNode::Literal(LiteralNode { value: '9' });

    let mut counter = NodeCounter::new();
    expr.accept(&mut counter).unwrap();
    assert_eq!(counter.count, 1);

    assert_eq!(ExpressionPrinter::print(&expr).unwrap(), "Literal(9)");
}

#[test]
fn test_binary_expression_visitor() {
    // 1 + 2
    let expr = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left: ExpressionNode::Literal(LiteralNode { value: '1' }),
        operator: BinaryOperator::Add,
        right: ExpressionNode::Literal(LiteralNode { value: '2' }),
    }));

    let mut counter = NodeCounter::new();
    expr.accept(&mut counter).unwrap();
    assert_eq!(counter.count, 3); // 2 literals + 1 binary expression

    assert_eq!(
        ExpressionPrinter::print(&expr).unwrap(),
        "Binary(Literal(1)+Literal(2))"
    );
}

#[test]
fn test_paren_node_is_constructible_by_hand() {
    // (a-b), built manually: the parser itself never emits Paren nodes
    let expr = ExpressionNode::Paren(Box::new(ParenExpressionNode {
        operand: ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left: ExpressionNode::Variable(VariableNode { name: 'a' }),
            operator: BinaryOperator::Sub,
            right: ExpressionNode::Variable(VariableNode { name: 'b' }),
        })),
    }));

    let mut counter = NodeCounter::new();
    expr.accept(&mut counter).unwrap();
    assert_eq!(counter.count, 4);

    assert_eq!(
        ExpressionPrinter::print(&expr).unwrap(),
        "Paren(Binary(Variable(a)-Variable(b)))"
    );
    assert_eq!(expr.to_string(), "(a-b)");
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let expr = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left: ExpressionNode::Variable(VariableNode { name: 'x' }),
        operator: BinaryOperator::Mul,
        right: ExpressionNode::Literal(LiteralNode { value: '5' }),
    }));

    let json = arith_ast::to_json(&expr).unwrap();
    let back: ExpressionNode = arith_ast::from_json(&json).unwrap();
    assert_eq!(expr, back);
}
