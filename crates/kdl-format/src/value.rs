//! Identifier, string and literal rendering.

use kdl_lexer::chars::is_bare_identifier;
use kdl_parser::{Literal, Value};

/// Render an identifier bare when it reads back unchanged, quoted otherwise.
pub fn format_identifier(name: &str) -> String {
    if is_bare_identifier(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}

/// Render a string as an escaped `"..."` literal.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(s) => quote_string(s),
        Literal::Integer(n) => n.to_string(),
        // Debug always keeps a `.` or an exponent, so the text lexes as a float
        Literal::Float(n) => format!("{n:?}"),
        Literal::Bool(b) => b.to_string(),
        Literal::Null => "null".into(),
    }
}

/// Render a value with its `(type)` annotation, if any.
pub fn format_value(value: &Value) -> String {
    match &value.type_hint {
        Some(hint) => format!("({}){}", format_identifier(hint), format_literal(&value.literal)),
        None => format_literal(&value.literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifiers_stay_bare() {
        assert_eq!(format_identifier("node"), "node");
        assert_eq!(format_identifier("foo-bar.baz"), "foo-bar.baz");
    }

    #[test]
    fn test_identifiers_needing_quotes() {
        assert_eq!(format_identifier("two words"), "\"two words\"");
        assert_eq!(format_identifier("null"), "\"null\"");
        assert_eq!(format_identifier("9lives"), "\"9lives\"");
        assert_eq!(format_identifier(""), "\"\"");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(quote_string("a\"b\\c\n"), r#""a\"b\\c\n""#);
        assert_eq!(quote_string("\u{7}"), r#""\u{7}""#);
        assert_eq!(quote_string("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_literals() {
        assert_eq!(format_literal(&Literal::Integer(-12)), "-12");
        assert_eq!(format_literal(&Literal::Float(1.0)), "1.0");
        assert_eq!(format_literal(&Literal::Float(1e-7)), "1e-7");
        assert_eq!(format_literal(&Literal::Bool(false)), "false");
        assert_eq!(format_literal(&Literal::Null), "null");
    }

    #[test]
    fn test_value_with_type_hint() {
        let value = Value::new(5i128).with_type_hint("u8");
        assert_eq!(format_value(&value), "(u8)5");
        let value = Value::new("x").with_type_hint("my type");
        assert_eq!(format_value(&value), "(\"my type\")\"x\"");
    }
}
