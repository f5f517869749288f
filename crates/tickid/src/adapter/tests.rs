use crate::{Id, Layout, MonoId, ShortId, TaggedId, TickId, adapter::as_bytes_id};
use serde::{Deserialize, Serialize};
use serde_json::json;

const REFERENCE: [u8; 10] = [0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41];

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
struct Event {
    id: TickId,
    parent: TickId,
}

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
struct Row {
    #[serde(with = "as_bytes_id")]
    id: ShortId,
}

#[test]
fn ids_serialize_as_text() {
    let event = Event {
        id: TickId::from_array(REFERENCE),
        parent: TickId::NIL,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value, json!({ "id": "9p4f2pv0yj3f8b21", "parent": null }));

    let back: Event = serde_json::from_value(value).unwrap();
    assert_eq!(back, event);
}

#[test]
fn null_and_empty_string_read_as_nil() {
    let from_null: TickId = serde_json::from_str("null").unwrap();
    let from_empty: TickId = serde_json::from_str(r#""""#).unwrap();
    assert_eq!(from_null, TickId::NIL);
    assert_eq!(from_empty, TickId::NIL);
}

#[test]
fn malformed_text_is_rejected() {
    let err = serde_json::from_str::<TickId>(r#""9p4f2pv0yj3f8b2""#).unwrap_err();
    assert!(err.to_string().contains("invalid identifier"), "{err}");

    assert!(serde_json::from_str::<TickId>(r#""9p4f2pv0yj3f8b2!""#).is_err());
    assert!(serde_json::from_str::<TickId>("42").is_err());
}

#[test]
fn every_layout_round_trips_through_json() {
    let mono = MonoId::from_components(1, 0, 2);
    let tagged = TaggedId::from_components(3, 0xAABB_CCDD, 4);
    let text = serde_json::to_string(&(mono, tagged)).unwrap();
    let back: (MonoId, TaggedId) = serde_json::from_str(&text).unwrap();
    assert_eq!(back, (mono, tagged));
}

#[test]
fn bytes_adapter_writes_raw_bytes() {
    let row = Row {
        id: ShortId::from_array([1, 2, 3, 4, 5, 6, 7, 8]),
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value, json!({ "id": [1, 2, 3, 4, 5, 6, 7, 8] }));
    let back: Row = serde_json::from_value(value).unwrap();
    assert_eq!(back, row);
}

#[test]
fn bytes_adapter_maps_nil_to_null() {
    let row = Row { id: ShortId::NIL };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value, json!({ "id": null }));
    let back: Row = serde_json::from_value(value).unwrap();
    assert!(back.id.is_nil());
}

#[test]
fn bytes_adapter_checks_length() {
    assert!(serde_json::from_value::<Row>(json!({ "id": [1, 2, 3] })).is_err());
    assert!(serde_json::from_value::<Row>(json!({ "id": [0, 1, 2, 3, 4, 5, 6, 7, 8] })).is_err());
}
