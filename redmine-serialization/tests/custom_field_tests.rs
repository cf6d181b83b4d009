//! Custom field codec: single and multi-valued shapes in both dialects.

use pretty_assertions::assert_eq;
use redmine_serialization::{
    ConvertError, EntitySerializer, IssueCustomFieldConverter, EntityConverter, Mapping, Node,
    SerializationError,
};
use redmine_types::{CustomFieldValue, IssueCustomField};
use serde_json::{Value, json};

const ROOT: Option<&str> = Some("custom_field");

fn decode_json(payload: &str) -> IssueCustomField {
    EntitySerializer::json()
        .decode_single(payload, ROOT)
        .unwrap()
        .unwrap()
}

fn decode_xml(payload: &str) -> IssueCustomField {
    EntitySerializer::xml()
        .decode_single(payload, ROOT)
        .unwrap()
        .unwrap()
}

fn encode_json(field: &IssueCustomField) -> Value {
    let payload = EntitySerializer::json().encode_single(field).unwrap();
    serde_json::from_str(&payload).unwrap()
}

fn round_trip(serializer: &EntitySerializer, field: &IssueCustomField) -> IssueCustomField {
    let payload = serializer.encode_single(field).unwrap();
    serializer.decode_single(&payload, ROOT).unwrap().unwrap()
}

fn field(id: u32, multiple: bool, values: &[&str]) -> IssueCustomField {
    IssueCustomField {
        id,
        name: None,
        multiple,
        values: values.iter().copied().map(CustomFieldValue::new).collect(),
    }
}

// ── JSON decode ──────────────────────────────────────────────────

#[test]
fn json_single_value() {
    let decoded = decode_json(r#"{"custom_field":{"id":3,"name":"Severity","value":"High"}}"#);
    assert_eq!(decoded, IssueCustomField::single(3, "Severity", "High"));
}

#[test]
fn json_multiple_values() {
    let decoded = decode_json(
        r#"{"custom_field":{"id":4,"name":"Platforms","multiple":true,"value":["linux","mac"]}}"#,
    );
    assert_eq!(
        decoded,
        IssueCustomField::multiple(4, "Platforms", ["linux", "mac"])
    );
}

#[test]
fn json_array_on_single_valued_field_keeps_every_value() {
    let decoded = decode_json(r#"{"custom_field":{"id":4,"value":["a","b"]}}"#);
    assert_eq!(decoded, field(4, false, &["a", "b"]));
}

#[test]
fn json_text_on_multi_valued_field_is_one_value() {
    let decoded = decode_json(r#"{"custom_field":{"id":4,"multiple":true,"value":"only"}}"#);
    assert_eq!(decoded, field(4, true, &["only"]));
}

#[test]
fn json_empty_shapes_have_no_values() {
    for value in [r#""""#, "null", "[]"] {
        let payload = format!(r#"{{"custom_field":{{"id":5,"value":{value}}}}}"#);
        assert_eq!(decode_json(&payload).values, Vec::<CustomFieldValue>::new(), "value {value}");
    }
    assert_eq!(decode_json(r#"{"custom_field":{"id":5}}"#).values, Vec::<CustomFieldValue>::new());
}

#[test]
fn json_numeric_and_boolean_values_read_as_text() {
    let decoded = decode_json(r#"{"custom_field":{"id":6,"multiple":"1","value":[1,true]}}"#);
    assert_eq!(decoded, field(6, true, &["1", "true"]));
}

#[test]
fn json_nested_value_arrays_flatten() {
    let decoded = decode_json(r#"{"custom_field":{"id":7,"value":[["a","b"],"c"]}}"#);
    assert_eq!(decoded.values.len(), 3);
    assert_eq!(decoded.values[2].info, "c");
}

#[test]
fn mapping_value_is_rejected() {
    let err = EntitySerializer::json()
        .decode_single::<IssueCustomField>(r#"{"custom_field":{"id":1,"value":{"x":1}}}"#, ROOT)
        .unwrap_err();
    assert!(matches!(
        err,
        SerializationError::Conversion {
            type_name: "IssueCustomField",
            source: ConvertError::InvalidField { expected: "text or array", .. },
            ..
        }
    ));
}

#[test]
fn missing_id_is_rejected() {
    let err = EntitySerializer::json()
        .decode_single::<IssueCustomField>(r#"{"custom_field":{"value":"x"}}"#, ROOT)
        .unwrap_err();
    assert!(matches!(
        err,
        SerializationError::Conversion {
            source: ConvertError::MissingField(_),
            ..
        }
    ));
}

// ── XML decode ───────────────────────────────────────────────────

#[test]
fn xml_single_value() {
    let decoded = decode_xml(r#"<custom_field id="3" name="Severity"><value>High</value></custom_field>"#);
    assert_eq!(decoded, IssueCustomField::single(3, "Severity", "High"));
}

#[test]
fn xml_multiple_values() {
    let decoded = decode_xml(
        r#"<custom_field id="4" name="Platforms" multiple="true">
             <value type="array">
               <value>linux</value>
               <value>mac</value>
             </value>
           </custom_field>"#,
    );
    assert_eq!(
        decoded,
        IssueCustomField::multiple(4, "Platforms", ["linux", "mac"])
    );
}

#[test]
fn xml_empty_shapes_have_no_values() {
    let payloads = [
        r#"<custom_field id="5"><value/></custom_field>"#,
        r#"<custom_field id="5"><value></value></custom_field>"#,
        r#"<custom_field id="5"><value type="array"></value></custom_field>"#,
        r#"<custom_field id="5"/>"#,
    ];
    for payload in payloads {
        assert_eq!(decode_xml(payload).values, Vec::<CustomFieldValue>::new(), "{payload}");
    }
}

#[test]
fn xml_escaped_text_is_unescaped() {
    let decoded = decode_xml(r#"<custom_field id="3"><value>R&amp;D</value></custom_field>"#);
    assert_eq!(decoded.value(), Some("R&D"));
}

#[test]
fn xml_value_with_attributes_keeps_its_text() {
    let decoded = decode_xml(r#"<custom_field id="1"><value lang="en">High</value></custom_field>"#);
    assert_eq!(decoded, field(1, false, &["High"]));

    let attribute_only = decode_xml(r#"<custom_field id="1"><value lang="en"/></custom_field>"#);
    assert_eq!(attribute_only.values, Vec::<CustomFieldValue>::new());
}

#[test]
fn xml_array_items_with_attributes_keep_their_text() {
    let decoded = decode_xml(
        r#"<custom_field id="1">
             <value type="array"><value lang="en">a</value><value>b</value></value>
           </custom_field>"#,
    );
    assert_eq!(decoded, field(1, false, &["a", "b"]));
}

#[test]
fn xml_array_item_without_text_is_rejected() {
    let err = EntitySerializer::xml()
        .decode_single::<IssueCustomField>(
            r#"<custom_field id="1"><value type="array"><value lang="en"/><value>b</value></value></custom_field>"#,
            ROOT,
        )
        .unwrap_err();
    match err {
        SerializationError::Conversion {
            source: ConvertError::InField { field, source },
            ..
        } => {
            assert_eq!(field, "value");
            assert!(matches!(*source, ConvertError::MissingField(ref key) if key == "value"));
        }
        other => panic!("expected Conversion, got {other:?}"),
    }
}

#[test]
fn blank_single_value_has_no_values_in_either_dialect() {
    let json = decode_json(r#"{"custom_field":{"id":5,"value":" "}}"#);
    let xml = decode_xml(r#"<custom_field id="5"><value> </value></custom_field>"#);
    assert_eq!(json.values, Vec::<CustomFieldValue>::new());
    assert_eq!(xml, json);
}

// ── Encode ───────────────────────────────────────────────────────

#[test]
fn encodes_single_value_as_text() {
    assert_eq!(
        encode_json(&IssueCustomField::single(3, "Severity", "High")),
        json!({"custom_field": {"id": 3, "name": "Severity", "value": "High"}})
    );
}

#[test]
fn encodes_multiple_values_as_array() {
    assert_eq!(
        encode_json(&IssueCustomField::multiple(4, "Platforms", ["linux", "mac"])),
        json!({"custom_field": {
            "id": 4,
            "name": "Platforms",
            "multiple": true,
            "value": ["linux", "mac"]
        }})
    );
}

#[test]
fn encodes_no_values_as_null() {
    assert_eq!(
        encode_json(&field(5, true, &[])),
        json!({"custom_field": {"id": 5, "multiple": true, "value": null}})
    );
}

#[test]
fn xml_shapes() {
    let serializer = EntitySerializer::xml();
    let decl = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

    assert_eq!(
        serializer
            .encode_single(&IssueCustomField::single(3, "Severity", "High"))
            .unwrap(),
        format!(r#"{decl}<custom_field id="3" name="Severity"><value>High</value></custom_field>"#)
    );
    assert_eq!(
        serializer
            .encode_single(&IssueCustomField::multiple(4, "Platforms", ["linux", "mac"]))
            .unwrap(),
        format!(
            r#"{decl}<custom_field id="4" multiple="true" name="Platforms"><value type="array"><value>linux</value><value>mac</value></value></custom_field>"#
        )
    );
    assert_eq!(
        serializer.encode_single(&field(5, false, &[])).unwrap(),
        format!(r#"{decl}<custom_field id="5"><value/></custom_field>"#)
    );
}

#[test]
fn converter_writes_id_and_name_as_attributes() {
    let node = IssueCustomFieldConverter
        .encode(&IssueCustomField::single(3, "Severity", "High"))
        .unwrap();
    let map: &Mapping = node.as_mapping().unwrap();
    assert!(map.is_attribute("id"));
    assert!(map.is_attribute("name"));
    assert!(!map.is_attribute("value"));
    assert_eq!(map.get("value"), Some(&Node::string("High")));
}

// ── Round trips ──────────────────────────────────────────────────

#[test]
fn round_trips_in_both_dialects() {
    let fields = [
        IssueCustomField::single(3, "Severity", "High"),
        IssueCustomField::multiple(4, "Platforms", ["linux", "mac", "windows"]),
        IssueCustomField::multiple(4, "Platforms", ["linux"]),
        field(5, true, &[]),
        field(5, false, &[]),
        field(6, false, &["a", "b"]),
    ];

    for serializer in [EntitySerializer::json(), EntitySerializer::xml()] {
        for original in &fields {
            assert_eq!(
                &round_trip(&serializer, original),
                original,
                "format {}",
                serializer.format()
            );
        }
    }
}

#[test]
fn single_empty_string_reads_back_as_no_values() {
    let original = IssueCustomField::single(3, "Note", "");
    for serializer in [EntitySerializer::json(), EntitySerializer::xml()] {
        let decoded = round_trip(&serializer, &original);
        assert_eq!(decoded.values, Vec::<CustomFieldValue>::new());
        assert_eq!(decoded.name.as_deref(), Some("Note"));
    }
}
