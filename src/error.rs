use crate::lexer::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Illegal character: '{ch}'\nFile {source_name}, line {}", .position.line)]
    IllegalCharacter {
        ch: char,
        source_name: String,
        position: Position,
    },
}

impl LexError {
    pub fn message(&self) -> String {
        match self {
            LexError::IllegalCharacter { ch, .. } => format!("illegal character '{ch}'"),
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            LexError::IllegalCharacter { source_name, .. } => source_name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::IllegalCharacter { position, .. } => *position,
        }
    }

    pub fn line(&self) -> usize {
        self.position().line
    }
}

/// The token sequence does not match the grammar.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid syntax: {message}\nFile {source_name}, line {}", .position.line)]
pub struct SyntaxError {
    pub message: String,
    pub source_name: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        source_name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            message: message.into(),
            source_name: source_name.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn line(&self) -> usize {
        self.position.line
    }
}

/// First failure of a pipeline run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    pub fn message(&self) -> String {
        match self {
            Error::Lex(err) => err.message(),
            Error::Syntax(err) => err.message().to_string(),
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            Error::Lex(err) => err.source_name(),
            Error::Syntax(err) => err.source_name(),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Error::Lex(err) => err.line(),
            Error::Syntax(err) => err.line(),
        }
    }
}
