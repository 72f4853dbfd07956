//! Snapshot persistence contracts and wire codec.
//!
//! # Responsibility
//! - Define the injected storage seam used by the tracker view.
//! - Encode/decode the full item list as one serialized snapshot value.
//!
//! # Invariants
//! - A snapshot is the entire ordered list; every save is a full
//!   replacement, never an incremental write.
//! - Decoded snapshots must contain only valid items with pairwise-distinct
//!   ids; anything else is reported as `Corrupt`, not silently admitted.

use crate::db::DbError;
use crate::model::item::Item;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemorySnapshotStore;
pub use sqlite::SqliteSnapshotStore;

/// Fixed storage key for the persisted item list.
pub const SNAPSHOT_KEY: &str = "expiryItems";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for snapshot persistence and codec operations.
#[derive(Debug)]
pub enum StoreError {
    /// Stored snapshot text does not decode into a valid item list.
    Corrupt(String),
    /// The item list could not be serialized.
    Encode(serde_json::Error),
    /// Persistence transport failure.
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupt(message) => write!(f, "corrupt snapshot: {message}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Corrupt(_) => None,
            Self::Encode(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage dependency owned by the tracker view.
///
/// `load` distinguishes an absent snapshot (`Ok(None)`) from a malformed
/// one (`Err(StoreError::Corrupt)`); recovery policy belongs to the caller.
pub trait SnapshotStore {
    fn load(&self) -> StoreResult<Option<Vec<Item>>>;
    fn save(&self, items: &[Item]) -> StoreResult<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> StoreResult<Option<Vec<Item>>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        (**self).save(items)
    }
}

/// Serializes the full item list to its snapshot text.
pub fn encode_snapshot(items: &[Item]) -> StoreResult<String> {
    serde_json::to_string(items).map_err(StoreError::Encode)
}

/// Parses snapshot text back into the ordered item list.
///
/// # Errors
/// - `Corrupt` when the text is not a JSON item array, when any item fails
///   `Item::validate`, or when two items share an id.
pub fn decode_snapshot(raw: &str) -> StoreResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(raw)
        .map_err(|err| StoreError::Corrupt(format!("not a valid item list: {err}")))?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()
            .map_err(|err| StoreError::Corrupt(format!("invalid item `{}`: {err}", item.id)))?;
        if !seen.insert(item.id) {
            return Err(StoreError::Corrupt(format!(
                "duplicate item id `{}`",
                item.id
            )));
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::{decode_snapshot, encode_snapshot, StoreError};
    use crate::model::item::Item;
    use chrono::NaiveDate;

    fn date(text: &str) -> NaiveDate {
        text.parse().expect("valid test date")
    }

    #[test]
    fn empty_list_encodes_to_empty_array() {
        assert_eq!(encode_snapshot(&[]).unwrap(), "[]");
        assert!(decode_snapshot("[]").unwrap().is_empty());
    }

    #[test]
    fn decode_preserves_order_ids_and_fields() {
        let first = Item::new("milk", date("2025-03-10"), "fridge door").unwrap();
        let second = Item::new("eggs", date("2025-01-05"), "").unwrap();
        let encoded = encode_snapshot(&[first.clone(), second.clone()]).unwrap();

        let decoded = decode_snapshot(&encoded).unwrap();
        assert_eq!(decoded, vec![first, second]);
    }

    #[test]
    fn decode_rejects_non_json_text() {
        let err = decode_snapshot("definitely not json").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn decode_rejects_items_with_empty_name() {
        let raw = r#"[{"id":"018f4e3c-0000-7000-8000-000000000001","name":"","expiryDate":"2025-03-10","notes":""}]"#;
        let err = decode_snapshot(raw).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let item = Item::new("milk", date("2025-03-10"), "").unwrap();
        let encoded = encode_snapshot(&[item.clone(), item]).unwrap();

        let err = decode_snapshot(&encoded).unwrap_err();
        match err {
            StoreError::Corrupt(message) => assert!(message.contains("duplicate")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
