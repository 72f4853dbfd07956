use chrono::NaiveDate;
use shelflife_core::{Item, ItemValidationError};
use uuid::Uuid;

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn new_item_sets_fields_and_fresh_id() {
    let item = Item::new("milk", date("2025-03-10"), "fridge door").unwrap();

    assert!(!item.id.is_nil());
    assert_eq!(item.name, "milk");
    assert_eq!(item.expiry_date, date("2025-03-10"));
    assert_eq!(item.notes, "fridge door");
}

#[test]
fn notes_may_be_empty() {
    let item = Item::new("eggs", date("2025-01-05"), "").unwrap();
    assert!(item.notes.is_empty());
}

#[test]
fn empty_name_is_rejected() {
    let err = Item::new("", date("2025-03-10"), "").unwrap_err();
    assert_eq!(err, ItemValidationError::EmptyName);

    let err = Item::new("   ", date("2025-03-10"), "").unwrap_err();
    assert_eq!(err, ItemValidationError::EmptyName);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Item::with_id(Uuid::nil(), "milk", date("2025-03-10"), "").unwrap_err();
    assert_eq!(err, ItemValidationError::NilId);
}

#[test]
fn ids_are_distinct_across_creations() {
    let first = Item::new("a", date("2025-01-01"), "").unwrap();
    let second = Item::new("b", date("2025-01-01"), "").unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("018f4e3c-1111-7222-8333-444455556666").unwrap();
    let item = Item::with_id(id, "yogurt", date("2025-01-05"), "back shelf").unwrap();

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "yogurt");
    assert_eq!(json["expiryDate"], "2025-01-05");
    assert_eq!(json["notes"], "back shelf");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}
