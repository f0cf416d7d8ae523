pub mod token;

pub use token::{Position, Token, TokenKind};

use crate::error::LexError;
use crate::value::Number;
use log::{debug, trace};

pub type LexResult = Result<Vec<Token>, LexError>;

/// Tokenizes `input`, terminating the sequence with a single `EndOfInput`.
pub fn lex(input: &str, source_name: &str) -> LexResult {
    Lexer::new(input, source_name).make_tokens()
}

pub struct Lexer<'a> {
    input: Vec<char>,
    source_name: &'a str,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str, source_name: &'a str) -> Self {
        Self {
            input: input.chars().collect(),
            source_name,
            position: Position::default(),
        }
    }

    pub fn make_tokens(mut self) -> LexResult {
        debug!("Lexing {} chars from {}", self.input.len(), self.source_name);
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let start = self.position;
            let token = match ch {
                ' ' | '\t' | '\n' => {
                    self.advance();
                    continue;
                }
                '0'..='9' => self.lex_number(),
                '+' => self.single(TokenKind::Add),
                '-' => self.single(TokenKind::Subtract),
                '*' => self.single(TokenKind::Multiply),
                '/' => self.single(TokenKind::Divide),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                _ => {
                    return Err(LexError::IllegalCharacter {
                        ch,
                        source_name: self.source_name.to_string(),
                        position: start,
                    })
                }
            };
            trace!("token {token} at {}:{}", start.line, start.column);
            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::EndOfInput, self.position));
        debug!("Produced {} tokens", tokens.len());
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position.offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position.advance(ch);
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, start)
    }

    /// Digits with at most one `.`. A second `.` ends the literal unconsumed.
    fn lex_number(&mut self) -> Token {
        let start = self.position;
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => text.push(ch),
                '.' if !seen_dot => {
                    seen_dot = true;
                    text.push(ch);
                }
                _ => break,
            }
            self.advance();
        }

        // Digits with one optional dot always parse as f64; the fallbacks are unreachable.
        if seen_dot {
            let value = text.parse::<f64>().unwrap_or(f64::NAN);
            Token::number(TokenKind::Float, Number::Float(value), start)
        } else {
            let value = match text.parse::<i64>() {
                Ok(value) => Number::Int(value),
                Err(_) => {
                    debug!("integer literal {text} exceeds i64, storing as float");
                    Number::Float(text.parse::<f64>().unwrap_or(f64::INFINITY))
                }
            };
            Token::number(TokenKind::Int, value, start)
        }
    }
}
