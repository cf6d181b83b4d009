//! Custom field codec.
//!
//! A custom field carries its value either as one text element or as an
//! array, depending on whether the field is multi-valued. The two wire shapes
//! for XML are:
//!
//! ```xml
//! <custom_field id="3" name="Severity"><value>High</value></custom_field>
//!
//! <custom_field id="4" name="Platforms" multiple="true">
//!   <value type="array"><value>linux</value><value>mac</value></value>
//! </custom_field>
//! ```
//!
//! and in JSON `"value": "High"` versus `"value": ["linux", "mac"]`.
//!
//! The declared `multiple` flag and the actual shape may disagree. Decoding
//! trusts the shape and encoding trusts the number of values; neither fails
//! on a mismatch.

use crate::converter::EntityConverter;
use crate::converters::fields;
use crate::error::{ConvertError, ConvertResult};
use crate::materialize::flatten_with;
use crate::node::{Mapping, Node};
use crate::xml::TEXT_KEY;
use redmine_types::{CustomFieldValue, IssueCustomField};
use std::borrow::Cow;
use tracing::debug;

const ID: &str = "id";
const NAME: &str = "name";
const MULTIPLE: &str = "multiple";
const VALUE: &str = "value";

/// One element of a custom field's value list.
pub struct CustomFieldValueConverter;

impl EntityConverter for CustomFieldValueConverter {
    type Entity = CustomFieldValue;

    /// Accepts bare text, a null (empty value), an XML element carrying
    /// attributes beside its text, or a `{"value": ...}` mapping.
    fn decode(&self, node: &Node) -> ConvertResult<CustomFieldValue> {
        match node {
            Node::Mapping(map) => match map.get(TEXT_KEY).or_else(|| map.get(VALUE)) {
                Some(inner) => self.decode(inner),
                None => Err(ConvertError::MissingField(VALUE.to_string())),
            },
            Node::Sequence(_) => Err(ConvertError::UnexpectedNode {
                expected: "custom field value",
                found: node.kind_name(),
            }),
            Node::Scalar(_) => Ok(CustomFieldValue::new(
                node.as_text().unwrap_or_default(),
            )),
        }
    }

    fn encode(&self, value: &CustomFieldValue) -> ConvertResult<Node> {
        Ok(Node::string(value.info.as_str()))
    }
}

/// Text of a `<value>` element that was read as a mapping because it carries
/// attributes. Attribute-only elements have no text.
fn element_text(element: &Mapping) -> ConvertResult<Option<Cow<'_, str>>> {
    if let Some(text) = element.get(TEXT_KEY) {
        return Ok(text.as_text());
    }
    match element.iter().find(|(key, _)| !element.is_attribute(key)) {
        None => Ok(None),
        Some(_) => Err(ConvertError::InvalidField {
            field: VALUE.to_string(),
            expected: "text or array",
            found: "mapping".to_string(),
        }),
    }
}

/// Blank text counts as no value, in both dialects.
fn single_value(text: Option<Cow<'_, str>>) -> Vec<CustomFieldValue> {
    text.filter(|text| !text.trim().is_empty())
        .map(|text| vec![CustomFieldValue::new(text)])
        .unwrap_or_default()
}

pub struct IssueCustomFieldConverter;

impl EntityConverter for IssueCustomFieldConverter {
    type Entity = IssueCustomField;

    fn decode(&self, node: &Node) -> ConvertResult<IssueCustomField> {
        let map = fields::expect_mapping(node)?;
        let id = fields::required_u32(map, ID)?;
        let name = fields::string(map, NAME)?;
        let multiple = fields::bool_field(map, MULTIPLE)?.unwrap_or(false);

        let values = match map.get(VALUE) {
            None => Vec::new(),
            Some(array @ Node::Sequence(_)) => {
                if !multiple {
                    debug!("Custom field {} is not multiple but carries an array value", id);
                }
                flatten_with(array, |item| CustomFieldValueConverter.decode(item))
                    .map_err(|err| err.in_field(VALUE))?
            }
            Some(Node::Mapping(element)) => single_value(element_text(element)?),
            Some(scalar) => single_value(scalar.as_text()),
        };

        Ok(IssueCustomField {
            id,
            name,
            multiple,
            values,
        })
    }

    fn encode(&self, field: &IssueCustomField) -> ConvertResult<Node> {
        let mut map = Mapping::new().with_attribute(ID, field.id);
        if let Some(name) = &field.name {
            map.insert_attribute(NAME, name.as_str());
        }
        if field.multiple {
            map.insert_attribute(MULTIPLE, true);
        }

        let value = match field.values.as_slice() {
            [] => Node::null(),
            [single] => CustomFieldValueConverter.encode(single)?,
            values => fields::encode_list(values, VALUE, |value| {
                CustomFieldValueConverter.encode(value)
            })?,
        };
        if field.multiple && field.values.len() == 1 {
            debug!("Custom field {} is multiple but has one value; writing it as text", field.id);
        }
        map.insert(VALUE, value);
        Ok(map.into())
    }
}
