//! Document parser for KDL.
//!
//! Four routines call each other top-down:
//!
//! - `parse_nodes` reads sibling nodes until the scope ends (end of input
//!   at the top level, `}` inside a children block),
//! - `parse_node` reads one node up to its terminator,
//! - `parse_arg_or_prop` decides whether the next unit inside a node is an
//!   argument or a `key=value` property,
//! - `skip_insignificant` steps over whitespace, comments and line
//!   continuations, stopping in front of newlines.
//!
//! A `/-` (slashdash) before a node, argument, property or children block
//! parses that unit as usual and then drops it.

use kdl_lexer::chars::{is_newline, is_value_terminator, is_whitespace};
use kdl_lexer::literal::read_value;
use kdl_lexer::{read_identifier, read_type_hint, Identifier, Position, Reader, StopMode};
use tracing::{debug, trace};

use crate::ast::{Document, Node, Value};
use crate::options::ParseOptions;
use crate::{ParseError, ParseErrorKind};

const SLASHDASH: &str = "/-";
const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const CRLF: &str = "\r\n";

/// KDL document parser.
///
/// Holds the reader and the nesting depth for one parse; nothing is shared
/// between parsers.
pub struct Parser {
    reader: Reader,
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    /// Create a new parser for the given source.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &str, options: ParseOptions) -> Self {
        Self {
            reader: Reader::new(source),
            depth: 0,
            options,
        }
    }

    /// Parse source code into a document.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        Self::parse_with_options(source, ParseOptions::default())
    }

    pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
        debug!(len = source.len(), max_depth = options.max_depth, "parsing");
        let mut parser = Parser::with_options(source, options);
        let doc = parser.parse_document()?;
        debug!(nodes = doc.nodes.len(), "parsed");
        Ok(doc)
    }

    /// Parse a full document from the current position.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let nodes = self.parse_nodes()?;
        Ok(Document { nodes })
    }

    /// Number of children blocks currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Parse sibling nodes. Inside a children block this stops in front of
    /// the closing `}`, which belongs to the node that opened the block.
    fn parse_nodes(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            let c = loop {
                let Some(c) = self.skip_insignificant()? else {
                    if self.depth == 0 {
                        return Ok(nodes);
                    }
                    return Err(self.error(
                        ParseErrorKind::UnterminatedBlock,
                        "Unterminated children block, expected '}'",
                    ));
                };
                if !is_newline(c) {
                    break c;
                }
                self.consume_newline();
            };

            match c {
                ';' => {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedSemicolon,
                        "Unexpected ';' not terminating a node",
                    ))
                }
                '}' if self.depth == 0 => {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedCloseBrace,
                        "Unexpected top-level '}'",
                    ))
                }
                '}' => return Ok(nodes),
                _ => {}
            }

            let slashdash = self.eat_slashdash()?;
            let node = self.parse_node()?;
            if slashdash {
                trace!(name = %node.name, "discarded node");
            } else {
                nodes.push(node);
            }
        }
    }

    /// Parse one node and consume its terminator (newline or `;`). A `}`
    /// terminator is left in place.
    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let type_hint = read_type_hint(&mut self.reader)?;
        let name = read_identifier(&mut self.reader, StopMode::Freestanding)?;

        let mut node = Node::new(name.name);
        node.type_hint = type_hint;
        trace!(name = %node.name, depth = self.depth, "node");

        loop {
            let Some(c) = self.skip_insignificant()? else {
                return Ok(node);
            };

            match c {
                c if is_newline(c) => {
                    self.consume_newline();
                    return Ok(node);
                }
                ';' => {
                    self.reader.advance();
                    return Ok(node);
                }
                '}' => return Ok(node),
                '{' => {
                    // A second block is accepted and appends to the first
                    let children = self.parse_children()?;
                    node.children.extend(children);
                }
                _ => self.parse_arg_or_prop(&mut node)?,
            }
        }
    }

    /// Parse a `{ ... }` block, from the opening brace through the closing
    /// one.
    fn parse_children(&mut self) -> Result<Vec<Node>, ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(
                ParseErrorKind::NestingTooDeep,
                format!("Children blocks nested deeper than {}", self.options.max_depth),
            ));
        }
        self.reader.advance(); // consume `{`
        self.depth += 1;
        trace!(depth = self.depth, "children block");

        let children = self.parse_nodes()?;

        self.reader.advance(); // consume `}`
        self.depth -= 1;
        Ok(children)
    }

    // =========================================================================
    // Arguments and properties
    // =========================================================================

    /// Parse one argument or property and attach it to `node`.
    ///
    /// A bare word may start either an identifier or a value, so without a
    /// type hint an identifier is tried first and the token it is followed
    /// by decides: `=` makes a property, a terminator makes a string
    /// argument (quoted identifiers only). If the identifier read fails the
    /// reader is rewound and the token is read as a value instead.
    fn parse_arg_or_prop(&mut self, node: &mut Node) -> Result<(), ParseError> {
        let slashdash = self.eat_slashdash()?;

        if slashdash && self.reader.peek() == Some('{') {
            let discarded = self.parse_children()?;
            trace!(count = discarded.len(), "discarded children block");
            return Ok(());
        }

        let type_hint = read_type_hint(&mut self.reader)?;

        if type_hint.is_none() {
            let checkpoint = self.reader.checkpoint();
            let start = self.reader.position();
            match read_identifier(&mut self.reader, StopMode::Equals) {
                Ok(ident) => return self.finish_identifier(node, ident, start, slashdash),
                Err(_) => self.reader.rewind(checkpoint),
            }
        }

        let literal = read_value(&mut self.reader)?;
        let value = Value { literal, type_hint };
        self.expect_value_end()?;

        if slashdash {
            trace!(?value, "discarded argument");
        } else {
            node.args.push(value);
        }
        Ok(())
    }

    /// Decide what an identifier inside a node was: a property key, a
    /// quoted string argument, or an error.
    fn finish_identifier(
        &mut self,
        node: &mut Node,
        ident: Identifier,
        start: Position,
        slashdash: bool,
    ) -> Result<(), ParseError> {
        match self.reader.peek() {
            Some('=') => {
                self.reader.advance();
                let type_hint = read_type_hint(&mut self.reader)?;
                let literal = read_value(&mut self.reader)?;
                self.expect_value_end()?;
                let value = Value { literal, type_hint };
                if slashdash {
                    trace!(key = %ident.name, "discarded property");
                } else {
                    node.set_prop(ident.name, value);
                }
                return Ok(());
            }
            Some(c) if !is_value_terminator(c) => {
                return Err(self.error(
                    ParseErrorKind::UnexpectedTokenAfterIdentifier,
                    format!("Unexpected '{c}' after identifier '{}'", ident.name),
                ))
            }
            _ => {}
        }

        if !ident.quoted {
            return Err(self.error_at(
                start,
                ParseErrorKind::BareIdentifier,
                format!(
                    "Unexpected bare identifier '{}', string arguments must be quoted",
                    ident.name
                ),
            ));
        }

        if slashdash {
            trace!(value = %ident.name, "discarded argument");
        } else {
            node.add_arg(ident.name);
        }
        Ok(())
    }

    /// A complete value must be followed by a terminator or end of input.
    fn expect_value_end(&self) -> Result<(), ParseError> {
        match self.reader.peek() {
            Some(c) if !is_value_terminator(c) => Err(self.error(
                ParseErrorKind::UnexpectedTokenAfterValue,
                format!("Unexpected '{c}' after value"),
            )),
            _ => Ok(()),
        }
    }

    /// Consume a `/-` marker and the inline space after it, if present.
    fn eat_slashdash(&mut self) -> Result<bool, ParseError> {
        if !self.reader.is_next(SLASHDASH) {
            return Ok(false);
        }
        self.reader.discard_chars(2);
        self.skip_insignificant()?;
        Ok(true)
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skip whitespace, line continuations and comments. Returns the next
    /// significant character (or newline) without consuming it, or `None`
    /// at end of input.
    fn skip_insignificant(&mut self) -> Result<Option<char>, ParseError> {
        loop {
            let Some(c) = self.reader.peek() else {
                return Ok(None);
            };

            if is_whitespace(c) {
                self.reader.advance();
                continue;
            }

            // Line continuation joins the next line onto this one
            if c == '\\' {
                self.reader.advance();
                self.skip_line(true);
                continue;
            }

            if self.reader.is_next(LINE_COMMENT) {
                self.reader.discard_chars(2);
                self.skip_line(false);
                return Ok(self.reader.peek());
            }

            if self.reader.is_next(BLOCK_COMMENT_OPEN) {
                self.skip_block_comment()?;
                continue;
            }

            return Ok(Some(c));
        }
    }

    /// Skip a `/* ... */` comment. Comments nest, so every opener needs its
    /// own closer.
    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.reader.position();
        self.reader.discard_chars(2);

        let mut depth = 1usize;
        while depth > 0 {
            if self.reader.is_next(BLOCK_COMMENT_OPEN) {
                depth += 1;
                self.reader.discard_chars(2);
            } else if self.reader.is_next(BLOCK_COMMENT_CLOSE) {
                depth -= 1;
                self.reader.discard_chars(2);
            } else if self.reader.advance().is_none() {
                return Err(self.error_at(
                    start,
                    ParseErrorKind::UnterminatedComment,
                    "Unterminated block comment",
                ));
            }
        }
        Ok(())
    }

    /// Discard characters up to the next line break.
    ///
    /// With `after_break` the break is consumed as well. Without it the
    /// reader stops in front of the break; of a CRLF only the CR is
    /// consumed, leaving a single LF for the caller to see.
    fn skip_line(&mut self, after_break: bool) {
        loop {
            if self.reader.is_next(CRLF) {
                self.reader.discard_chars(if after_break { 2 } else { 1 });
                return;
            }
            match self.reader.peek() {
                None => return,
                Some(c) if is_newline(c) => {
                    if after_break {
                        self.reader.advance();
                    }
                    return;
                }
                Some(_) => {
                    self.reader.advance();
                }
            }
        }
    }

    /// Consume one line break, treating CRLF as a single break.
    fn consume_newline(&mut self) {
        if self.reader.is_next(CRLF) {
            self.reader.discard_chars(2);
        } else {
            self.reader.advance();
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        self.error_at(self.reader.position(), kind, message)
    }

    fn error_at(
        &self,
        position: Position,
        kind: ParseErrorKind,
        message: impl Into<String>,
    ) -> ParseError {
        ParseError {
            kind,
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Literal;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Document {
        Parser::parse(source).unwrap()
    }

    fn parse_err(source: &str) -> ParseError {
        Parser::parse(source).unwrap_err()
    }

    fn int(n: i128) -> Value {
        Value::new(n)
    }

    fn string(s: &str) -> Value {
        Value::new(s)
    }

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    // =========================================================================
    // Documents
    // =========================================================================

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }

    #[test]
    fn test_single_node() {
        let doc = parse("node");
        assert_eq!(doc.nodes, vec![Node::new("node")]);
    }

    #[test]
    fn test_nodes_separated_by_newlines_and_semicolons() {
        let doc = parse("a\nb; c\n\n\nd");
        assert_eq!(names(&doc.nodes), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse("a 1\r\nb 2\r\n\r\nc");
        assert_eq!(names(&doc.nodes), vec!["a", "b", "c"]);
        assert_eq!(doc.nodes[1].args, vec![int(2)]);
    }

    #[test]
    fn test_leading_semicolon_rejected() {
        let err = parse_err(";");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedSemicolon);
        assert_eq!(parse_err("a\n;").kind, ParseErrorKind::UnexpectedSemicolon);
    }

    #[test]
    fn test_double_semicolon_rejected() {
        assert_eq!(parse_err("a;;").kind, ParseErrorKind::UnexpectedSemicolon);
    }

    #[test]
    fn test_top_level_close_brace_rejected() {
        let err = parse_err("}");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCloseBrace);
        assert_eq!((err.line, err.column), (1, 1));
        assert_eq!(parse_err("a }").kind, ParseErrorKind::UnexpectedCloseBrace);
    }

    // =========================================================================
    // Node names and type hints
    // =========================================================================

    #[test]
    fn test_quoted_node_name() {
        let doc = parse(r#""my node" 1"#);
        assert_eq!(doc.nodes[0].name, "my node");
        assert_eq!(doc.nodes[0].args, vec![int(1)]);
    }

    #[test]
    fn test_keyword_spelled_node_name() {
        assert_eq!(parse("null").nodes[0].name, "null");
    }

    #[test]
    fn test_node_type_hint() {
        let doc = parse("(widget)button");
        assert_eq!(doc.nodes[0], Node::new("button").with_type_hint("widget"));
    }

    #[test]
    fn test_invalid_node_name_is_fatal() {
        let err = parse_err("1node");
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
        assert!(parse_err("\"open").is_eof());
    }

    // =========================================================================
    // Arguments
    // =========================================================================

    #[test]
    fn test_positional_arguments_keep_order() {
        let doc = parse("node 1 2 3");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2), int(3)]);
    }

    #[test]
    fn test_mixed_literal_arguments() {
        let doc = parse(r#"node "s" r"raw" 1.5 0xff true false null"#);
        assert_eq!(
            doc.nodes[0].args,
            vec![
                string("s"),
                string("raw"),
                Value::new(1.5),
                int(255),
                Value::new(true),
                Value::new(false),
                Value::new(Literal::Null),
            ]
        );
    }

    #[test]
    fn test_argument_type_hints() {
        let doc = parse(r#"node (u8)10 ("date")"2024-01-01""#);
        assert_eq!(
            doc.nodes[0].args,
            vec![
                int(10).with_type_hint("u8"),
                string("2024-01-01").with_type_hint("date"),
            ]
        );
    }

    #[test]
    fn test_bare_identifier_argument_rejected() {
        let err = parse_err("node arg");
        assert_eq!(err.kind, ParseErrorKind::BareIdentifier);
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn test_unexpected_token_after_identifier() {
        let err = parse_err(r#"node "a"b"#);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedTokenAfterIdentifier);
    }

    #[test]
    fn test_unexpected_token_after_value() {
        let err = parse_err("node 1a");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedTokenAfterValue);
        assert_eq!((err.line, err.column), (1, 7));
        assert_eq!(parse_err("node 1=2").kind, ParseErrorKind::UnexpectedTokenAfterValue);
    }

    #[test]
    fn test_keyword_followed_by_equals_is_not_a_property() {
        assert_eq!(parse_err("node true=1").kind, ParseErrorKind::UnexpectedTokenAfterValue);
    }

    #[test]
    fn test_value_followed_by_comment() {
        let doc = parse("node 1/* c */2// trailing");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2)]);
    }

    #[test]
    fn test_type_hinted_bare_word_rejected() {
        let err = parse_err("node (t)word");
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
    }

    #[test]
    fn test_argument_truncated_by_eof() {
        assert!(parse_err("node (u8)").is_eof());
        assert!(parse_err("node \"abc").is_eof());
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[test]
    fn test_property() {
        let doc = parse("node key=1");
        let node = &doc.nodes[0];
        assert!(node.args.is_empty());
        assert_eq!(node.get("key"), Some(&int(1)));
    }

    #[test]
    fn test_quoted_property_key() {
        let doc = parse(r#"node "the key"="v""#);
        assert_eq!(doc.nodes[0].get("the key"), Some(&string("v")));
    }

    #[test]
    fn test_property_value_type_hint() {
        let doc = parse("node size=(u16)512");
        assert_eq!(doc.nodes[0].get("size"), Some(&int(512).with_type_hint("u16")));
    }

    #[test]
    fn test_duplicate_property_last_wins() {
        let doc = parse("node k=1 k=2");
        assert_eq!(doc.nodes[0].props.len(), 1);
        assert_eq!(doc.nodes[0].get("k"), Some(&int(2)));
    }

    #[test]
    fn test_args_and_props_interleaved() {
        let doc = parse(r#"node 1 a=true "two" b=null 3"#);
        let node = &doc.nodes[0];
        assert_eq!(node.args, vec![int(1), string("two"), int(3)]);
        assert_eq!(node.get("a"), Some(&Value::new(true)));
        assert_eq!(node.get("b"), Some(&Value::new(Literal::Null)));
    }

    #[test]
    fn test_property_with_bad_value() {
        assert_eq!(parse_err("node k=v").kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(parse_err("node k=1x").kind, ParseErrorKind::UnexpectedTokenAfterValue);
        assert!(parse_err("node k=").is_eof());
    }

    // =========================================================================
    // Children
    // =========================================================================

    #[test]
    fn test_children_block() {
        let doc = parse("node { child1; child2 }");
        assert_eq!(doc.len(), 1);
        let node = &doc.nodes[0];
        assert!(node.args.is_empty());
        assert_eq!(names(&node.children), vec!["child1", "child2"]);
    }

    #[test]
    fn test_multiline_children() {
        let doc = parse("parent {\n  a 1\n  b {\n    c\n  }\n}\nsibling");
        assert_eq!(names(&doc.nodes), vec!["parent", "sibling"]);
        let parent = &doc.nodes[0];
        assert_eq!(names(&parent.children), vec!["a", "b"]);
        assert_eq!(names(&parent.children[1].children), vec!["c"]);
    }

    #[test]
    fn test_empty_children_block() {
        let doc = parse("node {}");
        assert!(doc.nodes[0].children.is_empty());
    }

    #[test]
    fn test_children_after_arguments() {
        let doc = parse("node 1 k=2 { child }");
        let node = &doc.nodes[0];
        assert_eq!(node.args, vec![int(1)]);
        assert_eq!(node.get("k"), Some(&int(2)));
        assert_eq!(names(&node.children), vec!["child"]);
    }

    #[test]
    fn test_children_directly_after_value() {
        let doc = parse("node 1{ child }");
        assert_eq!(doc.nodes[0].args, vec![int(1)]);
        assert_eq!(doc.nodes[0].children.len(), 1);
    }

    // Kept permissive on purpose: a node may carry more content after its
    // children block. Tighten once checked against the reference grammar.
    #[test]
    fn test_content_after_children_block_is_accepted() {
        let doc = parse("node { a } 1 { b }");
        let node = &doc.nodes[0];
        assert_eq!(node.args, vec![int(1)]);
        assert_eq!(names(&node.children), vec!["a", "b"]);
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_err("node {\n  child");
        assert_eq!(err.kind, ParseErrorKind::UnterminatedBlock);
        assert!(err.is_eof());
        assert_eq!(parse_err("a { b { c }").kind, ParseErrorKind::UnterminatedBlock);
    }

    #[test]
    fn test_semicolon_at_start_of_block_rejected() {
        assert_eq!(parse_err("node { ; }").kind, ParseErrorKind::UnexpectedSemicolon);
    }

    #[test]
    fn test_depth_returns_to_zero() {
        let mut parser = Parser::new("a { b { c { d } } }\ne { f }");
        let doc = parser.parse_document().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(parser.depth(), 0);
    }

    #[test]
    fn test_max_depth_enforced() {
        let options = ParseOptions::new().with_max_depth(2);
        assert!(Parser::parse_with_options("a { b { c } }", options).is_ok());
        let err = Parser::parse_with_options("a { b { c { d } } }", options).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_deep_nesting_fails_cleanly() {
        let source = "n {".repeat(10_000);
        let err = Parser::parse(&source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
    }

    // =========================================================================
    // Slashdash
    // =========================================================================

    #[test]
    fn test_slashdash_node() {
        let doc = parse("/-node arg=1\nkept");
        assert_eq!(names(&doc.nodes), vec!["kept"]);
    }

    #[test]
    fn test_slashdash_node_with_children() {
        let doc = parse("/-node {\n  child\n}\nkept");
        assert_eq!(names(&doc.nodes), vec!["kept"]);
    }

    #[test]
    fn test_slashdash_with_space() {
        let doc = parse("/- node\nkept /- 1 2");
        assert_eq!(names(&doc.nodes), vec!["kept"]);
        assert_eq!(doc.nodes[0].args, vec![int(2)]);
    }

    #[test]
    fn test_slashdash_argument() {
        let doc = parse("node 1 /-2 3");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(3)]);
    }

    #[test]
    fn test_slashdash_quoted_argument() {
        let doc = parse(r#"node /-"gone" "kept""#);
        assert_eq!(doc.nodes[0].args, vec![string("kept")]);
    }

    #[test]
    fn test_slashdash_property() {
        let doc = parse("node /-a=1 b=2");
        let node = &doc.nodes[0];
        assert_eq!(node.get("a"), None);
        assert_eq!(node.get("b"), Some(&int(2)));
    }

    #[test]
    fn test_slashdash_children_block() {
        let doc = parse("node /-{ hidden } { shown }");
        assert_eq!(names(&doc.nodes[0].children), vec!["shown"]);
    }

    #[test]
    fn test_slashdash_content_must_still_be_valid() {
        assert_eq!(parse_err("/-node arg").kind, ParseErrorKind::BareIdentifier);
        assert_eq!(parse_err("node /-arg").kind, ParseErrorKind::BareIdentifier);
        assert_eq!(parse_err("node /-k=v").kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(parse_err("node /-{ ; }").kind, ParseErrorKind::UnexpectedSemicolon);
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    #[test]
    fn test_line_comment() {
        let doc = parse("// header\nnode 1 // trailing\n// footer");
        assert_eq!(names(&doc.nodes), vec!["node"]);
        assert_eq!(doc.nodes[0].args, vec![int(1)]);
    }

    #[test]
    fn test_line_comment_ends_node() {
        let doc = parse("a // comment\nb");
        assert_eq!(names(&doc.nodes), vec!["a", "b"]);
    }

    #[test]
    fn test_line_comment_with_crlf() {
        let doc = parse("a 1 // note\r\nb 2");
        assert_eq!(names(&doc.nodes), vec!["a", "b"]);
    }

    #[test]
    fn test_block_comment() {
        let doc = parse("node /* inline */ 1 /* multi\nline */ 2");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2)]);
    }

    #[test]
    fn test_nested_block_comment() {
        let doc = parse(r#"node /* a /* b */ c */ "arg""#);
        assert_eq!(doc.nodes[0].args, vec![string("arg")]);
    }

    #[test]
    fn test_nested_comment_needs_every_closer() {
        // Only one closer for two openers: the rest of the input is comment
        let err = parse_err("node /* a /* b */ 1");
        assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn test_block_comment_between_nodes() {
        let doc = parse("a\n/* b\nc */\nd");
        assert_eq!(names(&doc.nodes), vec!["a", "d"]);
    }

    #[test]
    fn test_line_continuation() {
        let doc = parse("node 1 \\\n  2 \\ // comment\n  3\nnext");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2), int(3)]);
        assert_eq!(names(&doc.nodes), vec!["node", "next"]);
    }

    #[test]
    fn test_line_continuation_with_crlf() {
        let doc = parse("node 1 \\\r\n 2");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2)]);
    }

    #[test]
    fn test_line_continuation_at_eof() {
        let doc = parse("node 1 \\");
        assert_eq!(doc.nodes[0].args, vec![int(1)]);
    }

    #[test]
    fn test_unicode_whitespace() {
        let doc = parse("node\u{3000}1\u{00A0}2");
        assert_eq!(doc.nodes[0].args, vec![int(1), int(2)]);
    }

    // =========================================================================
    // Error positions
    // =========================================================================

    #[test]
    fn test_error_position_on_later_line() {
        let err = parse_err("a 1\nb 2\nc x");
        assert_eq!(err.kind, ParseErrorKind::BareIdentifier);
        assert_eq!((err.line, err.column), (3, 3));
    }

    #[test]
    fn test_error_display() {
        let err = parse_err("}");
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 1: Unexpected top-level '}'"
        );
    }
}
