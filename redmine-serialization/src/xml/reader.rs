use super::{ARRAY_TYPE, NIL_ATTRIBUTE, TEXT_KEY, TYPE_ATTRIBUTE};
use crate::error::XmlError;
use crate::node::{Mapping, Node};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element whose end tag has not been read yet.
struct OpenElement {
    name: String,
    attributes: Vec<(String, String)>,
    is_array: bool,
    is_nil: bool,
    children: Vec<(String, Node)>,
    text: String,
}

impl OpenElement {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut element = Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes: Vec::new(),
            is_array: false,
            is_nil: false,
            children: Vec::new(),
            text: String::new(),
        };
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            match key.as_str() {
                TYPE_ATTRIBUTE => element.is_array = value == ARRAY_TYPE,
                NIL_ATTRIBUTE => element.is_nil = value == "true",
                _ => element.attributes.push((key, value)),
            }
        }
        Ok(element)
    }

    fn into_node(self) -> (String, Node) {
        let node = if self.is_nil {
            Node::null()
        } else if self.is_array {
            Node::Sequence(self.children.into_iter().map(|(_, node)| node).collect())
        } else if self.children.is_empty() && self.attributes.is_empty() {
            if self.text.trim().is_empty() {
                Node::null()
            } else {
                Node::string(self.text)
            }
        } else {
            let mut map = Mapping::new();
            for (key, value) in self.attributes {
                map.insert_attribute(key, value);
            }
            for (name, node) in group_by_name(self.children) {
                map.insert(name, node);
            }
            if !self.text.trim().is_empty() {
                map.insert(TEXT_KEY, self.text);
            }
            Node::Mapping(map)
        };
        (self.name, node)
    }
}

/// Collects repeated sibling names into a sequence, keeping first-seen order.
fn group_by_name(children: Vec<(String, Node)>) -> Vec<(String, Node)> {
    let mut groups: Vec<(String, Vec<Node>)> = Vec::new();
    for (name, node) in children {
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, nodes)) => nodes.push(node),
            None => groups.push((name, vec![node])),
        }
    }
    groups
        .into_iter()
        .map(|(name, mut nodes)| {
            let node = if nodes.len() == 1 {
                nodes.pop().unwrap_or_else(Node::null)
            } else {
                Node::Sequence(nodes)
            };
            (name, node)
        })
        .collect()
}

/// Parses an XML document into `Mapping { <root element>: node }`.
///
/// When the root element is an array, its remaining attributes
/// (`total_count`, `offset`, `limit`) are placed next to it in the returned
/// mapping.
pub fn parse(input: &str) -> Result<Node, XmlError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut document: Option<Mapping> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(OpenElement::open(&start)?),
            Event::Empty(start) => {
                let element = OpenElement::open(&start)?;
                close(element, &mut stack, &mut document)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or(XmlError::NoRoot)?;
                close(element, &mut stack, &mut document)?;
            }
            Event::Text(text) => {
                if let Some(element) = stack.last_mut() {
                    element
                        .text
                        .push_str(&text.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(data) => {
                if let Some(element) = stack.last_mut() {
                    element
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = stack.last() {
        return Err(XmlError::Unclosed(element.name.clone()));
    }
    document.map(Node::Mapping).ok_or(XmlError::NoRoot)
}

fn close(
    element: OpenElement,
    stack: &mut [OpenElement],
    document: &mut Option<Mapping>,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element.into_node());
        return Ok(());
    }
    if document.is_some() {
        return Err(XmlError::MultipleRoots);
    }

    let mut root = Mapping::new();
    if element.is_array {
        for (key, value) in &element.attributes {
            root.insert(key.as_str(), value.as_str());
        }
    }
    let (name, node) = element.into_node();
    root.insert(name, node);
    *document = Some(root);
    Ok(())
}
