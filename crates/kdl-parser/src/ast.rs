//! Document tree produced by the parser.
//!
//! Ownership is strictly tree-shaped: each node owns its values and
//! children outright.

use std::collections::BTreeMap;

use kdl_lexer::Literal;

/// A complete KDL document.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first top-level node called `name`.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// A named node with arguments, properties and children.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub name: String,
    pub type_hint: Option<String>,
    pub args: Vec<Value>,
    /// Properties by name. Setting a name twice keeps the last value.
    pub props: BTreeMap<String, Value>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }

    pub fn add_arg(&mut self, value: impl Into<Value>) {
        self.args.push(value.into());
    }

    /// Set a property, returning the value it replaced.
    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.props.insert(name.into(), value.into())
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Property lookup.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

/// A literal with an optional `(type)` annotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Value {
    pub literal: Literal,
    pub type_hint: Option<String>,
}

impl Value {
    pub fn new(literal: impl Into<Literal>) -> Self {
        Self {
            literal: literal.into(),
            type_hint: None,
        }
    }

    pub fn with_type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.literal {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self.literal {
            Literal::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.literal {
            Literal::Float(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.literal {
            Literal::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.literal == Literal::Null
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Self::new(literal)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::new(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::new(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::new(b)
    }
}
