use pretty_assertions::assert_eq;
use redmine_serialization::{
    ConvertError, ConverterRegistry, EntitySerializer, Node, SerializationError, flatten_with,
    materialize,
};
use redmine_types::{EntityKind, Tracker};
use serde_json::json;
use std::any::Any;

fn tracker(id: u32) -> serde_json::Value {
    json!({"id": id, "name": format!("T{id}")})
}

fn materialize_trackers(node: &Node) -> Result<Vec<Tracker>, ConvertError> {
    let registry = ConverterRegistry::builtin();
    let converter = registry.lookup(EntityKind::Tracker).unwrap();
    let entities = materialize(converter, node)?;
    Ok(entities
        .into_iter()
        .map(|entity: Box<dyn Any + Send>| *entity.downcast::<Tracker>().unwrap())
        .collect())
}

fn ids(trackers: &[Tracker]) -> Vec<u32> {
    trackers.iter().map(|t| t.id).collect()
}

// ── materialize ──────────────────────────────────────────────────

#[test]
fn flat_list_keeps_order() {
    let node = Node::from(json!([tracker(3), tracker(1), tracker(2)]));
    assert_eq!(ids(&materialize_trackers(&node).unwrap()), vec![3, 1, 2]);
}

#[test]
fn nested_list_is_flattened_in_place() {
    let node = Node::from(json!([[tracker(1), tracker(2)], tracker(3)]));
    let trackers = materialize_trackers(&node).unwrap();
    assert_eq!(ids(&trackers), vec![1, 2, 3]);
    assert_eq!(trackers[0].name.as_deref(), Some("T1"));
}

#[test]
fn deep_nesting_is_flattened() {
    let node = Node::from(json!([[[[tracker(1)]]], [tracker(2), [[tracker(3)]]], tracker(4)]));
    assert_eq!(ids(&materialize_trackers(&node).unwrap()), vec![1, 2, 3, 4]);
}

#[test]
fn empty_and_nested_empty_lists_yield_nothing() {
    assert!(materialize_trackers(&Node::from(json!([]))).unwrap().is_empty());
    assert!(materialize_trackers(&Node::from(json!([[], [[]]]))).unwrap().is_empty());
}

#[test]
fn non_sequence_is_rejected() {
    let err = materialize_trackers(&Node::from(tracker(1))).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnexpectedNode {
            expected: "sequence",
            found: "mapping",
        }
    ));
}

#[test]
fn failing_element_fails_the_list() {
    let node = Node::from(json!([tracker(1), {"name": "no id"}]));
    let err = materialize_trackers(&node).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(ref field) if field == "id"));
}

// ── flatten_with ─────────────────────────────────────────────────

#[test]
fn flatten_with_applies_the_closure_to_leaves() {
    let node = Node::from(json!([["a", "b"], "c", [["d"]]]));
    let texts = flatten_with(&node, |leaf| {
        Ok(leaf.as_text().map(|text| text.into_owned()).unwrap_or_default())
    })
    .unwrap();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[test]
fn flatten_with_stops_at_first_error() {
    let node = Node::from(json!([1, 2, 3]));
    let mut seen = Vec::new();
    let err = flatten_with(&node, |leaf| {
        seen.push(leaf.clone());
        if seen.len() == 2 {
            Err(ConvertError::MissingField("stop".into()))
        } else {
            Ok(())
        }
    })
    .unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(_)));
    assert_eq!(seen.len(), 2);
}

// ── Through the dispatcher ───────────────────────────────────────

#[test]
fn collection_flattens_nested_arrays() {
    let payload = json!({"trackers": [[tracker(1), tracker(2)], tracker(3)]}).to_string();
    let page = EntitySerializer::json()
        .decode_collection::<Tracker>(&payload, None)
        .unwrap()
        .unwrap();
    assert_eq!(ids(&page.items), vec![1, 2, 3]);
}

#[test]
fn collection_node_must_be_a_sequence() {
    let payload = json!({"trackers": tracker(1)}).to_string();
    let err = EntitySerializer::json()
        .decode_collection::<Tracker>(&payload, None)
        .unwrap_err();
    assert!(matches!(
        err,
        SerializationError::Conversion {
            type_name: "Tracker",
            source: ConvertError::UnexpectedNode { .. },
            ..
        }
    ));
}

#[test]
fn xml_nested_arrays_flatten() {
    let payload = r#"<trackers type="array">
  <group type="array">
    <tracker id="1" name="Bug"/>
    <tracker id="2" name="Feature"/>
  </group>
  <tracker id="3" name="Support"/>
</trackers>"#;
    let page = EntitySerializer::xml()
        .decode_collection::<Tracker>(payload, None)
        .unwrap()
        .unwrap();
    assert_eq!(ids(&page.items), vec![1, 2, 3]);
}
