use pretty_assertions::assert_eq;
use redmine_serialization::{
    ConvertError, EntitySerializer, Node, SerializationError, aggregate_errors,
};
use redmine_types::ErrorMessage;
use serde_json::json;

fn decode_errors(serializer: &EntitySerializer, payload: &str) -> Vec<ErrorMessage> {
    serializer
        .decode_collection::<ErrorMessage>(payload, None)
        .unwrap()
        .unwrap()
        .items
}

// ── Through the dispatcher ───────────────────────────────────────

#[test]
fn json_errors_join_into_one_message() {
    let errors = decode_errors(
        &EntitySerializer::json(),
        r#"{"errors":["Name can't be blank","Name is too short","Project is invalid"]}"#,
    );
    assert_eq!(
        errors,
        vec![ErrorMessage::new(
            "Name can't be blank Name is too short Project is invalid"
        )]
    );
}

#[test]
fn xml_errors_join_into_one_message() {
    let payload = r#"<?xml version="1.0" encoding="UTF-8"?>
<errors type="array">
  <error>Name can't be blank</error>
  <error>Name is too short</error>
  <error>Project is invalid</error>
</errors>"#;
    let errors = decode_errors(&EntitySerializer::xml(), payload);
    assert_eq!(
        errors,
        vec![ErrorMessage::new(
            "Name can't be blank Name is too short Project is invalid"
        )]
    );
}

#[test]
fn empty_error_list_yields_one_empty_message() {
    let errors = decode_errors(&EntitySerializer::json(), r#"{"errors":[]}"#);
    assert_eq!(errors, vec![ErrorMessage::new("")]);
}

#[test]
fn single_error_decodes_alone() {
    let error: ErrorMessage = EntitySerializer::json()
        .decode_single(r#"{"error":"Not found"}"#, None)
        .unwrap()
        .unwrap();
    assert_eq!(error.info, "Not found");
}

#[test]
fn structured_error_entry_is_rejected() {
    let err = EntitySerializer::json()
        .decode_collection::<ErrorMessage>(r#"{"errors":[{"field":"name"}]}"#, None)
        .unwrap_err();
    assert!(matches!(
        err,
        SerializationError::Conversion {
            type_name: "Error",
            source: ConvertError::UnexpectedNode { found: "mapping", .. },
            ..
        }
    ));
}

// ── aggregate ────────────────────────────────────────────────────

#[test]
fn nested_lists_are_walked_and_nulls_skipped() {
    let node = Node::from(json!(["a", ["b", null, ["c"]], null, "d"]));
    assert_eq!(aggregate_errors(&node).unwrap().info, "a b c d");
}

#[test]
fn scalar_messages_are_rendered_as_text() {
    let node = Node::from(json!(["Quota exceeded by", 3, "files"]));
    assert_eq!(
        aggregate_errors(&node).unwrap().info,
        "Quota exceeded by 3 files"
    );
}

#[test]
fn no_trailing_separator() {
    let message = aggregate_errors(&Node::from(json!(["only"]))).unwrap();
    assert_eq!(message.info, "only");
}
