//! Character classes of the KDL grammar.

/// Characters that may never appear in a bare identifier.
const NON_IDENTIFIER: &[char] = &[
    '\\', '/', '(', ')', '{', '}', '<', '>', ';', '[', ']', '=', ',', '"',
];

/// Keywords that read as values rather than identifiers.
pub const KEYWORDS: &[&str] = &["true", "false", "null"];

/// Non-newline whitespace, including the byte-order mark.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// A single line-break character. CRLF is two of these; callers that care
/// check for it with `Reader::is_next("\r\n")`.
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\r' | '\n' | '\u{0085}' | '\u{000C}' | '\u{2028}' | '\u{2029}'
    )
}

pub fn is_identifier_char(c: char) -> bool {
    c > '\u{20}' && !is_whitespace(c) && !is_newline(c) && !NON_IDENTIFIER.contains(&c)
}

/// A character that may legally follow a complete value or string argument.
pub fn is_value_terminator(c: char) -> bool {
    is_whitespace(c) || is_newline(c) || matches!(c, ';' | '}' | '{' | '/' | '\\')
}

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Whether `s` can be written as a bare identifier and read back unchanged.
pub fn is_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !s.chars().all(is_identifier_char) || first.is_ascii_digit() {
        return false;
    }
    let second = chars.next();
    if matches!(first, '+' | '-') && second.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    // `r"` and `r#` open raw strings
    if first == 'r' && matches!(second, Some('"' | '#')) {
        return false;
    }
    !is_keyword(s)
}
