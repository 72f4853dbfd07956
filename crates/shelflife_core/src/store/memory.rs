//! In-memory snapshot store.
//!
//! Mirrors the key-value semantics of the durable store: it holds the raw
//! serialized snapshot text, so the codec is exercised on every call. Used
//! as the swappable fake in tests and by frontends without durable storage.

use super::{decode_snapshot, encode_snapshot, SnapshotStore, StoreResult};
use crate::model::item::Item;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    value: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemorySnapshotStore {
    /// Creates an empty store with no snapshot present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw snapshot text, valid or not.
    ///
    /// Garbage input is accepted on purpose so callers can exercise the
    /// malformed-snapshot recovery path.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
            saves: Cell::new(0),
        }
    }

    /// Returns the currently stored raw snapshot text, if any.
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of `save` calls observed since construction.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Option<Vec<Item>>> {
        match self.value.borrow().as_deref() {
            Some(raw) => Ok(Some(decode_snapshot(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        let encoded = encode_snapshot(items)?;
        *self.value.borrow_mut() = Some(encoded);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
