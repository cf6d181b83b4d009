//! Builds the single [`ErrorMessage`] returned for an `errors` list.
//!
//! A rejected write answers with a flat (occasionally nested) list of
//! messages. They are not independent entities, so instead of going through
//! the list materializer every message is joined into one record.

use crate::error::{ConvertError, ConvertResult};
use crate::node::Node;
use redmine_types::ErrorMessage;

/// Joins every scalar message under `node` with single spaces, in order.
///
/// Nested sequences are walked, nulls are skipped, and a mapping anywhere in
/// the list fails the whole aggregate.
pub fn aggregate(node: &Node) -> ConvertResult<ErrorMessage> {
    let mut fragments = Vec::new();
    collect(node, &mut fragments)?;
    Ok(ErrorMessage::new(fragments.join(" ")))
}

fn collect(node: &Node, fragments: &mut Vec<String>) -> ConvertResult<()> {
    match node {
        Node::Sequence(items) => {
            for item in items {
                collect(item, fragments)?;
            }
        }
        Node::Mapping(_) => {
            return Err(ConvertError::UnexpectedNode {
                expected: "error message",
                found: node.kind_name(),
            });
        }
        Node::Scalar(_) => {
            if let Some(text) = node.as_text() {
                fragments.push(text.into_owned());
            }
        }
    }
    Ok(())
}
