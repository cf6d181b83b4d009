//! Custom field values attached to issues, projects and users.

use crate::{Entity, EntityKind};

/// One value of a custom field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFieldValue {
    pub info: String,
}

impl CustomFieldValue {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

impl Entity for CustomFieldValue {
    const KIND: EntityKind = EntityKind::CustomFieldValue;
}

/// A custom field instance on a record.
///
/// When `multiple` is false the field normally holds exactly one value; when
/// true it holds zero or more. The two are not forced to agree: the service
/// may send an array for a field the client still believes is single-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCustomField {
    pub id: u32,
    pub name: Option<String>,
    pub multiple: bool,
    pub values: Vec<CustomFieldValue>,
}

impl IssueCustomField {
    /// A single-valued field.
    pub fn single(id: u32, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            multiple: false,
            values: vec![CustomFieldValue::new(value)],
        }
    }

    /// A multi-valued field holding `values` in order.
    pub fn multiple<I, S>(id: u32, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: Some(name.into()),
            multiple: true,
            values: values.into_iter().map(CustomFieldValue::new).collect(),
        }
    }

    /// The first value, if any.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(|v| v.info.as_str())
    }
}

impl Entity for IssueCustomField {
    const KIND: EntityKind = EntityKind::IssueCustomField;
}
