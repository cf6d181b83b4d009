//! JSON dialect: `serde_json` values mapped one-to-one onto [`Node`].

use crate::node::Node;
use serde_json::{Map, Value};

/// Parses a JSON document into a tree.
pub fn parse(input: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str::<Value>(input).map(Node::from)
}

/// Writes `node` as the single member `root` of a JSON object.
pub fn write(root: &str, node: Node) -> Result<String, serde_json::Error> {
    let mut document = Map::new();
    document.insert(root.to_string(), Value::from(node));
    serde_json::to_string(&Value::Object(document))
}
