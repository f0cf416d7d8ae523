use crate::lexer::{Position, TokenKind};
use crate::value::Number;
use std::fmt;
use std::mem;

mod evaluator;
mod parser;

pub use evaluator::Evaluator;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};

/// Expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    NumberLiteral {
        value: Number,
        position: Position,
    },
    BinaryOp {
        left: Box<Node>,
        operator: BinaryOperator,
        right: Box<Node>,
        position: Position,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Node>,
        position: Position,
    },
}

impl Node {
    pub fn number(value: impl Into<Number>, position: Position) -> Self {
        Node::NumberLiteral {
            value: value.into(),
            position,
        }
    }

    pub fn binary(left: Node, operator: BinaryOperator, right: Node, position: Position) -> Self {
        Node::BinaryOp {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            position,
        }
    }

    pub fn unary(operator: UnaryOperator, operand: Node, position: Position) -> Self {
        Node::UnaryOp {
            operator,
            operand: Box::new(operand),
            position,
        }
    }

    /// Position of the literal or of the operator token.
    pub fn position(&self) -> Position {
        match self {
            Node::NumberLiteral { position, .. }
            | Node::BinaryOp { position, .. }
            | Node::UnaryOp { position, .. } => *position,
        }
    }
}

impl Node {
    /// Moves every non-leaf child out onto `pending`, leaving literals behind.
    fn detach_children(&mut self, pending: &mut Vec<Node>) {
        let mut detach = |child: &mut Box<Node>| {
            if !matches!(**child, Node::NumberLiteral { .. }) {
                let placeholder = Node::number(Number::Int(0), Position::default());
                pending.push(mem::replace(&mut **child, placeholder));
            }
        };

        match self {
            Node::NumberLiteral { .. } => {}
            Node::BinaryOp { left, right, .. } => {
                detach(left);
                detach(right);
            }
            Node::UnaryOp { operand, .. } => detach(operand),
        }
    }
}

/// Long operator chains nest thousands of nodes deep; tear them down with a
/// work list instead of recursive drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Fully parenthesized rendering, e.g. `(2 + (3 * 4))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::NumberLiteral { value, .. } => write!(f, "{value}"),
            Node::BinaryOp { .. } => {
                let mut spine = Vec::new();
                let mut leftmost = self;
                while let Node::BinaryOp {
                    left,
                    operator,
                    right,
                    ..
                } = leftmost
                {
                    spine.push((*operator, &**right));
                    leftmost = &**left;
                }

                for _ in 0..spine.len() {
                    f.write_str("(")?;
                }
                write!(f, "{leftmost}")?;
                for (operator, right) in spine.into_iter().rev() {
                    write!(f, " {operator} {right})")?;
                }
                Ok(())
            }
            Node::UnaryOp {
                operator, operand, ..
            } => write!(f, "({operator}{operand})"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn apply(&self, left: Number, right: Number) -> Number {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }
}

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = String;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Add => Ok(BinaryOperator::Add),
            TokenKind::Subtract => Ok(BinaryOperator::Subtract),
            TokenKind::Multiply => Ok(BinaryOperator::Multiply),
            TokenKind::Divide => Ok(BinaryOperator::Divide),
            _ => Err(format!("Unknown binary operator: {kind}")),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    pub fn apply(&self, operand: Number) -> Number {
        match self {
            UnaryOperator::Plus => operand,
            UnaryOperator::Minus => -operand,
        }
    }
}

impl TryFrom<TokenKind> for UnaryOperator {
    type Error = String;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Add => Ok(UnaryOperator::Plus),
            TokenKind::Subtract => Ok(UnaryOperator::Minus),
            _ => Err(format!("Unknown unary operator: {kind}")),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Plus => f.write_str("+"),
            UnaryOperator::Minus => f.write_str("-"),
        }
    }
}
