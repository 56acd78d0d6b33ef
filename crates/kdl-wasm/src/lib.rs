//! WASM bindings for the KDL parser.
//!
//! Exposes `parse()` and `format()` to JavaScript via wasm-bindgen.
//! Both throw a JS error when the source does not parse.

use kdl_format::FormatOptions;
use kdl_parser::{Document, Parser};
use wasm_bindgen::prelude::*;

/// Parse KDL source into a plain JS object tree.
///
/// Returns `{ nodes: [{ name, type_hint, args, props, children }] }`.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let doc = parse_document(source)?;
    serde_wasm_bindgen::to_value(&doc).map_err(|e| JsError::new(&e.to_string()))
}

/// Re-format KDL source in canonical form. `indent` defaults to 4 spaces.
#[wasm_bindgen]
pub fn format(source: &str, indent: Option<u32>) -> Result<String, JsError> {
    format_with(source, indent).map_err(|e| JsError::new(&e))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_document(source: &str) -> Result<Document, JsError> {
    Parser::parse(source).map_err(|e| JsError::new(&e.to_string()))
}

fn format_with(source: &str, indent: Option<u32>) -> Result<String, String> {
    let mut options = FormatOptions::default();
    if let Some(indent) = indent {
        options.indent = indent as usize;
    }
    kdl_format::format_source(source, &options).map_err(|e| e.to_string())
}
