use super::{ARRAY_TYPE, TEXT_KEY, TYPE_ATTRIBUTE, item_name};
use crate::error::XmlError;
use crate::node::{Node, Scalar};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;

/// Writes `node` as the document element `root`, preceded by an XML
/// declaration.
pub fn write(root: &str, node: &Node) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_failed)?;
    write_element(&mut writer, root, node)?;
    String::from_utf8(writer.into_inner()).map_err(write_failed)
}

fn write_failed(err: impl Display) -> XmlError {
    XmlError::Write(err.to_string())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlError> {
    writer.write_event(event).map_err(write_failed)
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, node: &Node) -> Result<(), XmlError> {
    match node {
        Node::Scalar(Scalar::Null) => emit(writer, Event::Empty(BytesStart::new(name))),
        Node::Scalar(_) => {
            let text = node.as_text().unwrap_or_default();
            emit(writer, Event::Start(BytesStart::new(name)))?;
            emit(writer, Event::Text(BytesText::new(&text)))?;
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        Node::Sequence(items) => {
            let mut start = BytesStart::new(name);
            start.push_attribute((TYPE_ATTRIBUTE, ARRAY_TYPE));
            emit(writer, Event::Start(start))?;
            let item = item_name(name);
            for node in items {
                write_element(writer, &item, node)?;
            }
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        Node::Mapping(map) => {
            let mut start = BytesStart::new(name);
            let mut text = None;
            let mut children = Vec::new();
            for (key, value) in map.iter() {
                if key == TEXT_KEY {
                    text = value.as_text();
                } else if map.is_attribute(key) {
                    // A null attribute is written by leaving it out.
                    if let Some(value) = value.as_text() {
                        start.push_attribute((key, &*value));
                    }
                } else {
                    children.push((key, value));
                }
            }

            if text.is_none() && children.is_empty() {
                return emit(writer, Event::Empty(start));
            }
            emit(writer, Event::Start(start))?;
            if let Some(text) = text {
                emit(writer, Event::Text(BytesText::new(&text)))?;
            }
            for (key, value) in children {
                write_element(writer, key, value)?;
            }
            emit(writer, Event::End(BytesEnd::new(name)))
        }
    }
}
