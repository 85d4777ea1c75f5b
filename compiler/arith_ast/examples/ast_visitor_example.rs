//! Example of using the visitor pattern to traverse and process an
//! expression tree.

use arith_ast::ast::*;
use arith_ast::visit::{ExpressionPrinter, Visitable, VisitResult, Visitor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1 + 2 * x
    let ast = create_sample_ast();

    // Count nodes in the tree
    let mut counter = NodeCounter::default();
    ast.accept(&mut counter)?;

    println!("AST Node Counts:");
    println!("  Literals: {}", counter.literal_count);
    println!("  Variables: {}", counter.variable_count);
    println!("  Binary Operations: {}", counter.binary_op_count);

    // Collect variable names
    let mut collector = VariableCollector::new();
    ast.accept(&mut collector)?;

    println!("\nVariables used:");
    for var in &collector.variables {
        println!("  {var}");
    }

    // Print the canonical dump
    println!("\nCanonical dump:");
    println!("{}", ExpressionPrinter::print(&ast)?);

    Ok(())
}

/// A visitor that counts the number of nodes of each type in the tree.
#[derive(Default)]
pub struct NodeCounter {
    pub literal_count: usize,
    pub variable_count: usize,
    pub binary_op_count: usize,
    pub paren_count: usize,
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralNode) -> VisitResult<Self::Output> {
        self.literal_count += 1;
        Ok(())
    }

    fn visit_variable(&mut self, _node: &VariableNode) -> VisitResult<Self::Output> {
        self.variable_count += 1;
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.binary_op_count += 1;
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<Self::Output> {
        self.paren_count += 1;
        node.operand.accept(self)
    }
}

/// A visitor that collects all variable names in the tree.
pub struct VariableCollector {
    pub variables: Vec<char>,
}

impl VariableCollector {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
        }
    }
}

impl Visitor for VariableCollector {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralNode) -> VisitResult<Self::Output> {
        Ok(())
    }

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult<Self::Output> {
        self.variables.push(node.name);
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<Self::Output> {
        node.operand.accept(self)
    }
}

fn create_sample_ast() -> ExpressionNode {
    ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left: ExpressionNode::Literal(LiteralNode { value: '1' }),
        operator: BinaryOperator::Add,
        right: ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left: ExpressionNode::Literal(LiteralNode { value: '2' }),
            operator: BinaryOperator::Mul,
            right: ExpressionNode::Variable(VariableNode { name: 'x' }),
        })),
    }))
}
