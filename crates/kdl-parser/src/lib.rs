//! KDL Parser
//!
//! Parses KDL source into a `Document`: a forest of named nodes carrying
//! positional arguments, named properties and nested children.
//!
//! The parser works directly on a `kdl_lexer::Reader` and calls the
//! lexer's single-token readers (identifiers, type hints, literals) at the
//! points where the grammar needs one.
//!
//! # Example
//!
//! ```
//! use kdl_parser::Parser;
//!
//! let doc = Parser::parse("server port=8080 { tls; }").unwrap();
//! assert_eq!(doc.nodes[0].name, "server");
//! assert_eq!(doc.nodes[0].children[0].name, "tls");
//! ```

pub mod ast;
pub mod options;
pub mod parser;

pub use ast::{Document, Node, Value};
pub use kdl_lexer::Literal;
pub use options::ParseOptions;
pub use parser::Parser;

use kdl_lexer::{LexerError, LexerErrorKind};

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// End of input inside an open `{ ... }` block.
    UnterminatedBlock,
    /// End of input inside a `/* ... */` comment.
    UnterminatedComment,
    /// A `}` at the top level.
    UnexpectedCloseBrace,
    /// A `;` where a node was expected.
    UnexpectedSemicolon,
    /// An unquoted word standing alone as an argument.
    BareIdentifier,
    /// An identifier followed by something other than `=` or a terminator.
    UnexpectedTokenAfterIdentifier,
    /// A value followed by something other than a terminator.
    UnexpectedTokenAfterValue,
    /// Children blocks nested deeper than `ParseOptions::max_depth`.
    NestingTooDeep,
    /// End of input in the middle of a token.
    UnexpectedEof,
    /// A malformed identifier, type hint or literal.
    InvalidLiteral,
}

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// Whether the input ended too early.
    pub fn is_eof(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnexpectedEof
                | ParseErrorKind::UnterminatedBlock
                | ParseErrorKind::UnterminatedComment
        )
    }
}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        let kind = match e.kind {
            LexerErrorKind::UnexpectedEof => ParseErrorKind::UnexpectedEof,
            LexerErrorKind::InvalidSyntax => ParseErrorKind::InvalidLiteral,
        };
        ParseError {
            kind,
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}
