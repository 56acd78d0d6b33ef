//! Literal values: strings, raw strings, numbers and keywords.

use crate::chars::is_identifier_char;
use crate::reader::Reader;
use crate::{LexerError, LexerErrorKind};

/// A literal value as written in the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    String(String),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Null,
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<i128> for Literal {
    fn from(n: i128) -> Self {
        Literal::Integer(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

/// Read one literal value at the current position.
///
/// Bare words other than `true`, `false` and `null` are rejected: string
/// values must be quoted.
pub fn read_value(reader: &mut Reader) -> Result<Literal, LexerError> {
    let start = reader.position();
    match reader.peek_char()? {
        '"' => read_string(reader).map(Literal::String),
        'r' if is_raw_string_start(reader) => read_raw_string(reader).map(Literal::String),
        c if c.is_ascii_digit() => read_number(reader),
        '+' | '-' if reader.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => read_number(reader),
        c if is_identifier_char(c) => {
            let word = read_bare(reader);
            match word.as_str() {
                "true" => Ok(Literal::Bool(true)),
                "false" => Ok(Literal::Bool(false)),
                "null" => Ok(Literal::Null),
                _ => Err(reader.error_at(
                    start,
                    LexerErrorKind::InvalidSyntax,
                    format!("Unquoted string '{word}' is not a value"),
                )),
            }
        }
        c => Err(reader.syntax_error(format!("Unexpected character: '{c}'"))),
    }
}

/// Read a run of identifier characters (possibly empty).
pub(crate) fn read_bare(reader: &mut Reader) -> String {
    let mut word = String::new();
    while let Some(c) = reader.peek() {
        if !is_identifier_char(c) {
            break;
        }
        word.push(c);
        reader.advance();
    }
    word
}

/// Whether a raw string (`r"`, `r#"`, `r##"`, ...) starts here.
pub fn is_raw_string_start(reader: &Reader) -> bool {
    if reader.peek() != Some('r') {
        return false;
    }
    let mut n = 1;
    while reader.peek_nth(n) == Some('#') {
        n += 1;
    }
    reader.peek_nth(n) == Some('"')
}

/// Read an escaped string literal starting at `"`.
pub fn read_string(reader: &mut Reader) -> Result<String, LexerError> {
    let start = reader.position();
    if reader.peek() != Some('"') {
        return Err(reader.syntax_error("Expected '\"'"));
    }
    reader.advance(); // consume opening quote

    let mut value = String::new();
    loop {
        let Some(c) = reader.advance() else {
            return Err(reader.error_at(
                start,
                LexerErrorKind::UnexpectedEof,
                "Unterminated string",
            ));
        };
        match c {
            '"' => return Ok(value),
            '\\' => value.push(read_escape(reader)?),
            c => value.push(c),
        }
    }
}

/// Read the escape after a backslash inside a string.
fn read_escape(reader: &mut Reader) -> Result<char, LexerError> {
    let start = reader.position();
    let Some(c) = reader.advance() else {
        return Err(reader.error(LexerErrorKind::UnexpectedEof, "Unterminated escape sequence"));
    };
    let escaped = match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '\\' => '\\',
        '/' => '/',
        '"' => '"',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'u' => return read_unicode_escape(reader),
        c => {
            return Err(reader.error_at(
                start,
                LexerErrorKind::InvalidSyntax,
                format!("Invalid escape sequence: '\\{c}'"),
            ))
        }
    };
    Ok(escaped)
}

/// `\u{XXXXXX}` with one to six hex digits.
fn read_unicode_escape(reader: &mut Reader) -> Result<char, LexerError> {
    if reader.advance() != Some('{') {
        return Err(reader.syntax_error("Expected '{' in unicode escape"));
    }
    let mut hex = String::new();
    loop {
        match reader.advance() {
            Some('}') => break,
            Some(c) if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
            Some(_) => return Err(reader.syntax_error("Invalid unicode escape")),
            None => return Err(reader.eof()),
        }
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| reader.syntax_error(format!("Invalid unicode scalar value: '{hex}'")))
}

/// Read a raw string: `r"..."` or `r#"..."#` with any number of hashes.
pub fn read_raw_string(reader: &mut Reader) -> Result<String, LexerError> {
    let start = reader.position();
    reader.advance(); // consume `r`
    let mut hashes = 0;
    while reader.peek() == Some('#') {
        reader.advance();
        hashes += 1;
    }
    if reader.advance() != Some('"') {
        return Err(reader.error_at(start, LexerErrorKind::InvalidSyntax, "Malformed raw string"));
    }

    let closing: String = std::iter::once('"')
        .chain(std::iter::repeat('#').take(hashes))
        .collect();
    let mut value = String::new();
    loop {
        if reader.is_next(&closing) {
            reader.discard_chars(hashes + 1);
            return Ok(value);
        }
        match reader.advance() {
            Some(c) => value.push(c),
            None => {
                return Err(reader.error_at(
                    start,
                    LexerErrorKind::UnexpectedEof,
                    "Unterminated raw string",
                ))
            }
        }
    }
}

/// Read a number: `0x`/`0o`/`0b` integers or decimal integers and floats.
pub fn read_number(reader: &mut Reader) -> Result<Literal, LexerError> {
    let start = reader.position();
    let mut text = String::new();
    if let Some(sign @ ('+' | '-')) = reader.peek() {
        text.push(sign);
        reader.advance();
    }

    let radix = match (reader.peek(), reader.peek_nth(1)) {
        (Some('0'), Some('x')) => 16,
        (Some('0'), Some('o')) => 8,
        (Some('0'), Some('b')) => 2,
        _ => 10,
    };

    if radix != 10 {
        reader.discard_chars(2);
        text.push_str(&read_digits(reader, radix)?);
        return i128::from_str_radix(&text, radix).map(Literal::Integer).map_err(|_| {
            reader.error_at(start, LexerErrorKind::InvalidSyntax, "Integer out of range")
        });
    }

    text.push_str(&read_digits(reader, 10)?);
    let mut is_float = false;

    if reader.peek() == Some('.') && reader.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
        reader.advance();
        text.push('.');
        text.push_str(&read_digits(reader, 10)?);
        is_float = true;
    }

    if matches!(reader.peek(), Some('e' | 'E')) {
        reader.advance();
        text.push('e');
        if let Some(sign @ ('+' | '-')) = reader.peek() {
            text.push(sign);
            reader.advance();
        }
        text.push_str(&read_digits(reader, 10)?);
        is_float = true;
    }

    if is_float {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Literal::Float(value)),
            _ => Err(reader.error_at(start, LexerErrorKind::InvalidSyntax, "Float out of range")),
        }
    } else {
        text.parse::<i128>().map(Literal::Integer).map_err(|_| {
            reader.error_at(start, LexerErrorKind::InvalidSyntax, "Integer out of range")
        })
    }
}

/// Digits in `radix`, with `_` separators after the first digit.
fn read_digits(reader: &mut Reader, radix: u32) -> Result<String, LexerError> {
    let mut digits = String::new();
    match reader.peek() {
        Some(c) if c.is_digit(radix) => {
            digits.push(c);
            reader.advance();
        }
        Some(c) => return Err(reader.syntax_error(format!("Expected digit, got '{c}'"))),
        None => return Err(reader.eof()),
    }
    while let Some(c) = reader.peek() {
        if c.is_digit(radix) {
            digits.push(c);
        } else if c != '_' {
            break;
        }
        reader.advance();
    }
    Ok(digits)
}
