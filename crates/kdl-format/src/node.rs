//! Node writer.
//!
//! Walks the node tree, writing one node per line and nesting children in
//! braces indented by `FormatOptions::indent` per level.

use crate::value::{format_identifier, format_value};
use crate::{FormatError, FormatOptions};
use kdl_parser::Node;

/// Write `node` (and its children) at the given nesting level.
pub fn generate(
    node: &Node,
    options: &FormatOptions,
    out: &mut String,
    depth: usize,
) -> Result<(), FormatError> {
    if node.name.is_empty() {
        return Err(FormatError {
            message: "Node names cannot be empty".into(),
        });
    }

    let indent = " ".repeat(options.indent * depth);

    out.push_str(&indent);
    if let Some(ref hint) = node.type_hint {
        out.push('(');
        out.push_str(&format_identifier(hint));
        out.push(')');
    }
    out.push_str(&format_identifier(&node.name));

    for arg in &node.args {
        out.push(' ');
        out.push_str(&format_value(arg));
    }

    // BTreeMap iteration is already in key order
    for (key, value) in &node.props {
        out.push(' ');
        out.push_str(&format_identifier(key));
        out.push('=');
        out.push_str(&format_value(value));
    }

    if !node.children.is_empty() {
        out.push_str(" {\n");
        for child in &node.children {
            generate(child, options, out, depth + 1)?;
        }
        out.push_str(&indent);
        out.push('}');
    }

    out.push('\n');
    Ok(())
}
