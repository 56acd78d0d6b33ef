//! KDL Formatter
//!
//! Writes a parsed `Document` back out in canonical form: one node per
//! line, children in indented `{ ... }` blocks, properties in key order,
//! identifiers bare wherever that reads back the same.
//!
//! ```text
//! Document → format() → String → Parser::parse() → the same Document
//! ```

pub mod node;
pub mod value;

use kdl_parser::Document;

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Formatting error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Format error: {message}")]
pub struct FormatError {
    pub message: String,
}

/// Format a document with the given options.
pub fn format(doc: &Document, options: &FormatOptions) -> Result<String, FormatError> {
    let mut out = String::new();
    for n in &doc.nodes {
        node::generate(n, options, &mut out, 0)?;
    }
    Ok(out)
}

/// Parse and re-format source text in one step.
pub fn format_source(
    source: &str,
    options: &FormatOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    let doc = kdl_parser::Parser::parse(source)?;
    Ok(format(&doc, options)?)
}
