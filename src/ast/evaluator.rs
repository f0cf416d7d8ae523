use crate::ast::{BinaryOperator, Node};
use crate::value::Number;
use log::{debug, trace};

/// Tree-walking evaluator. Holds no state between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `ast` bottom-up. Arithmetic never fails: integer overflow
    /// promotes to float and division by zero yields an infinity or NaN.
    pub fn evaluate(&self, ast: &Node) -> Number {
        let result = self.visit(ast);
        debug!("Evaluated to {result}");
        result
    }

    fn visit(&self, node: &Node) -> Number {
        match node {
            Node::NumberLiteral { value, .. } => *value,
            Node::BinaryOp { .. } => self.visit_binary_chain(node),
            Node::UnaryOp {
                operator, operand, ..
            } => operator.apply(self.visit(operand)),
        }
    }

    /// Same-precedence chains nest down the left edge, so the left spine is
    /// walked with a loop and only right operands recurse.
    fn visit_binary_chain(&self, node: &Node) -> Number {
        let mut pending: Vec<(BinaryOperator, &Node)> = Vec::new();
        let mut leftmost = node;

        while let Node::BinaryOp {
            left,
            operator,
            right,
            ..
        } = leftmost
        {
            pending.push((*operator, &**right));
            leftmost = &**left;
        }

        let mut accumulator = self.visit(leftmost);
        for (operator, right) in pending.into_iter().rev() {
            let rhs = self.visit(right);
            trace!("{accumulator} {operator} {rhs}");
            accumulator = operator.apply(accumulator, rhs);
        }
        accumulator
    }
}
