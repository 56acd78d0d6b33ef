use crate::{LexerError, LexerErrorKind};

/// A location in the source, tracked for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index into the decoded characters.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// A saved reader position. Restoring it undoes every read made since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(Position);

/// Character cursor over KDL source.
///
/// Uses a `Vec<char>` for index-based navigation, so lookahead of any
/// length is a plain slice comparison and rewinding is just resetting the
/// position.
pub struct Reader {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Reader {
    /// Create a new reader. A leading byte-order mark is skipped.
    pub fn new(source: &str) -> Self {
        let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Next character without consuming it, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Next character without consuming it; end of input is an error.
    pub fn peek_char(&self) -> Result<char, LexerError> {
        self.peek().ok_or_else(|| self.eof())
    }

    /// Character `n` positions ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Whether `literal` appears at the current position. Never consumes.
    pub fn is_next(&self, literal: &str) -> bool {
        let mut at = self.pos;
        for expected in literal.chars() {
            match self.chars.get(at) {
                Some(&c) if c == expected => at += 1,
                _ => return false,
            }
        }
        true
    }

    /// Consume one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\r' && self.peek() == Some('\n') {
            // The LF completes this line break
            self.column += 1;
        } else if crate::chars::is_newline(c) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `n` characters.
    pub fn discard_chars(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position())
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        let Checkpoint(position) = checkpoint;
        self.pos = position.offset;
        self.line = position.line;
        self.column = position.column;
    }

    /// Build an error at the current position.
    pub fn error(&self, kind: LexerErrorKind, message: impl Into<String>) -> LexerError {
        self.error_at(self.position(), kind, message)
    }

    /// Build an error pointing at an earlier position, usually a token start.
    pub fn error_at(
        &self,
        position: Position,
        kind: LexerErrorKind,
        message: impl Into<String>,
    ) -> LexerError {
        LexerError {
            kind,
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// Build an invalid-syntax error at the current position.
    pub fn syntax_error(&self, message: impl Into<String>) -> LexerError {
        self.error(LexerErrorKind::InvalidSyntax, message)
    }

    /// Build an end-of-input error at the current position.
    pub fn eof(&self) -> LexerError {
        self.error(LexerErrorKind::UnexpectedEof, "Unexpected end of input")
    }
}
