//! XML dialect, built on `quick-xml`.
//!
//! The service marks arrays with `type="array"` and nulls with `nil="true"`.
//! Both attributes are consumed while building the tree: an array element
//! becomes a [`Node::Sequence`](crate::Node::Sequence), a nil element a null
//! scalar. Every other attribute becomes a mapping key flagged as an
//! attribute, so converters read `id="3"` and `<id>3</id>` the same way.

mod reader;
mod writer;

pub use reader::parse;
pub use writer::write;

use std::borrow::Cow;

const TYPE_ATTRIBUTE: &str = "type";
const NIL_ATTRIBUTE: &str = "nil";
const ARRAY_TYPE: &str = "array";

/// Key holding the text of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Element name for the items of an array element named `container`.
pub(crate) fn item_name(container: &str) -> Cow<'_, str> {
    if container == "news" {
        return Cow::Borrowed(container);
    }
    if let Some(stem) = container.strip_suffix("ies") {
        return Cow::Owned(format!("{stem}y"));
    }
    if let Some(stem) = container.strip_suffix("uses") {
        return Cow::Owned(format!("{stem}us"));
    }
    Cow::Borrowed(container.strip_suffix('s').unwrap_or(container))
}
