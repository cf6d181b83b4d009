//! The untyped tree both wire dialects decode into and encode from.
//!
//! A payload is parsed into a [`Node`] before any typed conversion starts.
//! JSON maps onto it directly; XML attributes and elements both become
//! mapping keys, with attribute keys remembered so they can be written back
//! as attributes.

use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// One node of an untyped payload tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// String-keyed children of a node.
///
/// Key order carries no meaning; entries are kept sorted so output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: BTreeMap<String, Node>,
    attributes: BTreeSet<String>,
}

impl Node {
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Text of a non-null scalar. Numbers and booleans are rendered the way
    /// they appear on the wire.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(Cow::Borrowed(s)),
            Self::Scalar(Scalar::Number(n)) => Some(Cow::Owned(n.to_string())),
            Self::Scalar(Scalar::Bool(b)) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            _ => None,
        }
    }

    /// Short shape name used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "boolean",
            Self::Scalar(Scalar::Number(_)) => "number",
            Self::Scalar(Scalar::String(_)) => "string",
        }
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element-style entry, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        let key = key.into();
        self.attributes.remove(&key);
        self.entries.insert(key, value.into());
    }

    /// Inserts an entry that XML writes as an attribute of the enclosing
    /// element. JSON treats it like any other key.
    pub fn insert_attribute(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        let key = key.into();
        self.attributes.insert(key.clone());
        self.entries.insert(key, value.into());
    }

    /// Inserts `value` only when it is present.
    pub fn insert_some<T: Into<Node>>(&mut self, key: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert_attribute(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Looks `key` up exactly, then ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&Node> {
        self.entries.get(key).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    pub fn is_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Node {
    /// Non-finite values have no wire form and become null.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::null(), |n| Self::Scalar(Scalar::Number(n)))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::null(), Into::into)
    }
}

// ── serde_json bridge ────────────────────────────────────────────

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                let mut mapping = Mapping::new();
                for (key, value) in map {
                    mapping.insert(key, Self::from(value));
                }
                Self::Mapping(mapping)
            }
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(Scalar::Null) => Self::Null,
            Node::Scalar(Scalar::Bool(b)) => Self::Bool(b),
            Node::Scalar(Scalar::Number(n)) => Self::Number(n),
            Node::Scalar(Scalar::String(s)) => Self::String(s),
            Node::Sequence(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Node::Mapping(mapping) => Self::Object(
                mapping
                    .entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
