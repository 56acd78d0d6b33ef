//! KDL Lexer
//!
//! Low-level building blocks for reading KDL source: a character reader with
//! lookahead and checkpoints, character classification, and lexers for
//! type hints, identifiers and literal values.
//!
//! The node grammar itself lives in `kdl-parser`; everything here works on a
//! single token at a time and leaves the reader positioned right after it.
//!
//! # Example
//!
//! ```
//! use kdl_lexer::{literal, Literal, Reader};
//!
//! let mut reader = Reader::new("0x1f");
//! assert_eq!(literal::read_value(&mut reader).unwrap(), Literal::Integer(31));
//! ```

pub mod chars;
pub mod ident;
pub mod literal;
pub mod reader;

pub use ident::{read_identifier, read_type_hint, Identifier, StopMode};
pub use literal::Literal;
pub use reader::{Checkpoint, Position, Reader};

/// Broad classification of a lexer failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// The input ended in the middle of a token (or before one was expected).
    UnexpectedEof,
    /// The input at this position is not a valid token.
    InvalidSyntax,
}

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexerError {
    /// Whether this error signals exhausted input.
    pub fn is_eof(&self) -> bool {
        self.kind == LexerErrorKind::UnexpectedEof
    }
}
