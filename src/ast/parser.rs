use crate::ast::{BinaryOperator, Node, UnaryOperator};
use crate::error::SyntaxError;
use crate::lexer::{Position, Token, TokenKind};
use log::{debug, trace};

/// Nesting allowed for parentheses and unary sign chains before parsing fails.
pub const DEFAULT_MAX_DEPTH: usize = 256;

const ADDITIVE: &[TokenKind] = &[TokenKind::Add, TokenKind::Subtract];
const MULTIPLICATIVE: &[TokenKind] = &[TokenKind::Multiply, TokenKind::Divide];

pub type ParseResult = Result<Node, SyntaxError>;

/// Recursive-descent parser over a token sequence ending in `EndOfInput`.
///
/// ```text
/// expression := term (('+'|'-') term)*
/// term       := factor (('*'|'/') factor)*
/// factor     := ('+'|'-') factor | NUMBER | '(' expression ')'
/// ```
pub struct Parser<'a> {
    tokens: &'a [Token],
    source_name: &'a str,
    index: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], source_name: &'a str) -> Self {
        Self {
            tokens,
            source_name,
            index: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses one expression and requires that it consumes all input.
    pub fn parse(mut self) -> ParseResult {
        debug!("Parsing {} tokens from {}", self.tokens.len(), self.source_name);
        let node = self.expression()?;

        if self.current_kind() != TokenKind::EndOfInput {
            return Err(self.error("expected '+', '-', '*', or '/'"));
        }

        debug!("Parsed expression rooted at {}:{}", node.position().line, node.position().column);
        Ok(node)
    }

    fn expression(&mut self) -> ParseResult {
        self.binary_operation(Self::term, ADDITIVE)
    }

    fn term(&mut self) -> ParseResult {
        self.binary_operation(Self::factor, MULTIPLICATIVE)
    }

    fn factor(&mut self) -> ParseResult {
        let token = self.current().cloned();
        let Some(token) = token else {
            return Err(self.error("expected int or float"));
        };
        trace!("factor at {token}");

        match token.kind {
            TokenKind::Add | TokenKind::Subtract => {
                self.advance();
                let operator = UnaryOperator::try_from(token.kind)
                    .map_err(|message| self.error(message))?;
                let operand = self.nested(Self::factor)?;
                Ok(Node::unary(operator, operand, token.position))
            }
            TokenKind::Int | TokenKind::Float => {
                let value = token
                    .value
                    .ok_or_else(|| self.error("expected int or float"))?;
                self.advance();
                Ok(Node::number(value, token.position))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.nested(Self::expression)?;
                if self.current_kind() != TokenKind::RParen {
                    return Err(self.error("expected ')'"));
                }
                self.advance();
                Ok(inner)
            }
            _ => Err(self.error("expected int or float")),
        }
    }

    /// Left-associative chain of `lower` nodes joined by any of `operators`.
    fn binary_operation(
        &mut self,
        lower: fn(&mut Self) -> ParseResult,
        operators: &[TokenKind],
    ) -> ParseResult {
        let mut left = lower(self)?;

        while operators.contains(&self.current_kind()) {
            let kind = self.current_kind();
            let position = self.current_position();
            self.advance();

            let operator = BinaryOperator::try_from(kind).map_err(|message| self.error(message))?;
            let right = lower(self)?;
            left = Node::binary(left, operator, right, position);
        }

        Ok(left)
    }

    fn nested(&mut self, rule: fn(&mut Self) -> ParseResult) -> ParseResult {
        if self.depth >= self.max_depth {
            return Err(self.error(format!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// The token under the cursor. Past the end the last token is held.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index).or_else(|| self.tokens.last())
    }

    fn current_kind(&self) -> TokenKind {
        self.current()
            .map_or(TokenKind::EndOfInput, |token| token.kind)
    }

    fn current_position(&self) -> Position {
        self.current().map_or_else(Position::default, |token| token.position)
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.source_name, self.current_position())
    }
}
