//! Typed readers and writers shared by the converter units.
//!
//! Readers accept both dialects: JSON carries numbers and booleans natively,
//! XML carries everything as text. A missing key, a null, and an empty
//! string all read as "absent".

use crate::error::{ConvertError, ConvertResult};
use crate::materialize::flatten_with;
use crate::node::{Mapping, Node, Scalar};
use chrono::{DateTime, NaiveDate, Utc};
use redmine_types::IdentifiableName;
use std::borrow::Cow;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn expect_mapping(node: &Node) -> ConvertResult<&Mapping> {
    node.as_mapping().ok_or(ConvertError::UnexpectedNode {
        expected: "mapping",
        found: node.kind_name(),
    })
}

/// Non-empty text of a scalar field.
fn text<'a>(map: &'a Mapping, key: &str) -> ConvertResult<Option<Cow<'a, str>>> {
    match map.get(key) {
        None => Ok(None),
        Some(node @ (Node::Mapping(_) | Node::Sequence(_))) => Err(ConvertError::InvalidField {
            field: key.to_string(),
            expected: "scalar",
            found: node.kind_name().to_string(),
        }),
        Some(node) => Ok(node.as_text().filter(|text| !text.trim().is_empty())),
    }
}

fn invalid(key: &str, expected: &'static str, found: &str) -> ConvertError {
    ConvertError::InvalidField {
        field: key.to_string(),
        expected,
        found: found.to_string(),
    }
}

pub(crate) fn string(map: &Mapping, key: &str) -> ConvertResult<Option<String>> {
    Ok(text(map, key)?.map(Cow::into_owned))
}

pub(crate) fn required_string(map: &Mapping, key: &str) -> ConvertResult<String> {
    string(map, key)?.ok_or_else(|| ConvertError::MissingField(key.to_string()))
}

pub(crate) fn u32_field(map: &Mapping, key: &str) -> ConvertResult<Option<u32>> {
    if let Some(Node::Scalar(Scalar::Number(n))) = map.get(key) {
        return n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(key, "unsigned integer", &n.to_string()));
    }
    text(map, key)?
        .map(|text| {
            text.trim()
                .parse::<u32>()
                .map_err(|_| invalid(key, "unsigned integer", &text))
        })
        .transpose()
}

pub(crate) fn required_u32(map: &Mapping, key: &str) -> ConvertResult<u32> {
    u32_field(map, key)?.ok_or_else(|| ConvertError::MissingField(key.to_string()))
}

pub(crate) fn f64_field(map: &Mapping, key: &str) -> ConvertResult<Option<f64>> {
    if let Some(Node::Scalar(Scalar::Number(n))) = map.get(key) {
        return Ok(n.as_f64());
    }
    text(map, key)?
        .map(|text| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| invalid(key, "number", &text))
        })
        .transpose()
}

pub(crate) fn bool_field(map: &Mapping, key: &str) -> ConvertResult<Option<bool>> {
    if let Some(Node::Scalar(Scalar::Bool(b))) = map.get(key) {
        return Ok(Some(*b));
    }
    text(map, key)?
        .map(|text| match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(key, "boolean", &text)),
        })
        .transpose()
}

pub(crate) fn date(map: &Mapping, key: &str) -> ConvertResult<Option<NaiveDate>> {
    text(map, key)?
        .map(|text| {
            NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                .map_err(|_| invalid(key, "date (YYYY-MM-DD)", &text))
        })
        .transpose()
}

pub(crate) fn datetime(map: &Mapping, key: &str) -> ConvertResult<Option<DateTime<Utc>>> {
    text(map, key)?
        .map(|text| {
            DateTime::parse_from_rfc3339(text.trim())
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| invalid(key, "RFC 3339 timestamp", &text))
        })
        .transpose()
}

pub(crate) fn date_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// An embedded `{id, name}` reference.
pub(crate) fn named(map: &Mapping, key: &str) -> ConvertResult<Option<IdentifiableName>> {
    match map.get(key) {
        None => Ok(None),
        Some(node) if node.is_null() => Ok(None),
        Some(node) => super::named::decode_identifiable_name(node)
            .map(Some)
            .map_err(|err| err.in_field(key)),
    }
}

/// A nested list; absent or null reads as empty.
pub(crate) fn list<T, F>(map: &Mapping, key: &str, convert: F) -> ConvertResult<Vec<T>>
where
    F: FnMut(&Node) -> ConvertResult<T>,
{
    match map.get(key) {
        None => Ok(Vec::new()),
        Some(node) if node.is_null() => Ok(Vec::new()),
        Some(node) => flatten_with(node, convert).map_err(|err| err.in_field(key)),
    }
}

/// Encodes each item and wraps the result in a sequence.
pub(crate) fn encode_list<T, F>(items: &[T], key: &str, mut encode: F) -> ConvertResult<Node>
where
    F: FnMut(&T) -> ConvertResult<Node>,
{
    items
        .iter()
        .map(|item| encode(item))
        .collect::<ConvertResult<Vec<_>>>()
        .map(Node::Sequence)
        .map_err(|err| err.in_field(key))
}
