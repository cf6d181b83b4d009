//! Recursive list materializer.
//!
//! The service sometimes wraps a list in one extra array level. Lists are
//! therefore walked recursively: nested sequences are flattened in place,
//! every other element is converted on its own. Order is kept as
//! encountered.

use crate::converter::ErasedConverter;
use crate::error::{ConvertError, ConvertResult};
use crate::node::Node;
use std::any::Any;

/// Converts every leaf of `node` with `converter`, the registry entry for the
/// target kind. Single-entity decoding goes through the same converter, so a
/// kind reads identically alone and in a list.
///
/// Fails when `node` is not a sequence or when any leaf fails to convert.
pub fn materialize(
    converter: &dyn ErasedConverter,
    node: &Node,
) -> ConvertResult<Vec<Box<dyn Any + Send>>> {
    flatten_with(node, |item| converter.decode_any(item))
}

/// Walks `node` like [`materialize`], converting each leaf with `convert`.
///
/// Converters use this for lists nested inside an entity so that nested and
/// top-level lists flatten the same way.
pub fn flatten_with<T, F>(node: &Node, mut convert: F) -> ConvertResult<Vec<T>>
where
    F: FnMut(&Node) -> ConvertResult<T>,
{
    let items = node.as_sequence().ok_or(ConvertError::UnexpectedNode {
        expected: "sequence",
        found: node.kind_name(),
    })?;
    let mut out = Vec::with_capacity(items.len());
    append_items(items, &mut convert, &mut out)?;
    Ok(out)
}

fn append_items<T, F>(items: &[Node], convert: &mut F, out: &mut Vec<T>) -> ConvertResult<()>
where
    F: FnMut(&Node) -> ConvertResult<T>,
{
    for item in items {
        match item {
            Node::Sequence(nested) => append_items(nested, convert, out)?,
            _ => out.push(convert(item)?),
        }
    }
    Ok(())
}
