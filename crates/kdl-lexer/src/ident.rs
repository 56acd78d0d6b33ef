//! Identifiers and type hints.

use crate::chars::is_keyword;
use crate::literal::{is_raw_string_start, read_bare, read_raw_string, read_string};
use crate::reader::Reader;
use crate::{LexerError, LexerErrorKind};

/// Where an identifier appears, which decides what it may look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    /// A node name. Nothing here can be mistaken for a value, so the
    /// keyword spellings `true`, `false` and `null` are allowed.
    Freestanding,
    /// A candidate property key, stopping before a possible `=`. Keywords
    /// are values in this position and are rejected.
    Equals,
}

/// An identifier and whether it was written as a (raw) string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub quoted: bool,
}

/// Read an identifier at the current position.
///
/// On failure the reader may have moved; callers that want to retry the
/// same input as something else take a checkpoint first.
pub fn read_identifier(reader: &mut Reader, mode: StopMode) -> Result<Identifier, LexerError> {
    let start = reader.position();
    let c = reader.peek_char()?;

    if c == '"' {
        let name = read_string(reader)?;
        return Ok(Identifier { name, quoted: true });
    }
    if is_raw_string_start(reader) {
        let name = read_raw_string(reader)?;
        return Ok(Identifier { name, quoted: true });
    }

    if c.is_ascii_digit()
        || (matches!(c, '+' | '-') && reader.peek_nth(1).is_some_and(|n| n.is_ascii_digit()))
    {
        return Err(reader.syntax_error("Identifiers cannot start with a digit"));
    }

    let name = read_bare(reader);
    if name.is_empty() {
        return Err(reader.syntax_error(format!("Expected identifier, got '{c}'")));
    }
    if mode == StopMode::Equals && is_keyword(&name) {
        return Err(reader.error_at(
            start,
            LexerErrorKind::InvalidSyntax,
            format!("Keyword '{name}' cannot be used as an identifier"),
        ));
    }

    Ok(Identifier {
        name,
        quoted: false,
    })
}

/// Read a `(type)` annotation if one starts here.
///
/// Returns `None` without consuming anything when the next character is
/// not `(`.
pub fn read_type_hint(reader: &mut Reader) -> Result<Option<String>, LexerError> {
    if reader.peek() != Some('(') {
        return Ok(None);
    }
    reader.advance(); // consume `(`

    let ident = read_identifier(reader, StopMode::Equals)?;

    match reader.peek_char()? {
        ')' => {
            reader.advance();
            Ok(Some(ident.name))
        }
        c => Err(reader.syntax_error(format!("Expected ')' after type hint, got '{c}'"))),
    }
}
