//! Tracker view: hydrate-then-ready item list over an injected store.
//!
//! # Responsibility
//! - Hydrate the item list from the snapshot store exactly once.
//! - Apply append-only creates and idempotent deletes.
//! - Persist the full list after every accepted change, in the order the
//!   changes were applied.
//!
//! # Invariants
//! - A constructed `TrackerView` is always ready: hydration happens inside
//!   the only constructor, so no persist can ever precede the initial read.
//! - `items` keeps insertion order; display sorting never reorders it.
//! - An absent or unreadable snapshot hydrates to an empty list, never an
//!   error surfaced to the caller.

use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::store::{SnapshotStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surfaced by tracker operations after hydration.
#[derive(Debug)]
pub enum TrackerError {
    /// Submitted fields do not form a valid item.
    Validation(ItemValidationError),
    /// The snapshot store rejected a write.
    Store(StoreError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ItemValidationError> for TrackerError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for TrackerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Single owner of the in-memory item list and its snapshot store.
///
/// Within a session the in-memory list is the source of truth; the store
/// holds the source of truth across sessions.
pub struct TrackerView<S: SnapshotStore> {
    store: S,
    items: Vec<Item>,
}

impl<S: SnapshotStore> TrackerView<S> {
    /// Reads the persisted snapshot and enters the ready state.
    ///
    /// Absent snapshot -> empty list. Malformed or unreadable snapshot ->
    /// empty list with a warning; the stored value is left untouched until
    /// the next accepted change overwrites it. Hydration never writes.
    pub fn hydrate(store: S) -> Self {
        let items = match store.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=tracker_hydrate module=view status=recovered error={err}");
                Vec::new()
            }
        };

        info!(
            "event=tracker_hydrate module=view status=ok items={}",
            items.len()
        );
        Self { store, items }
    }

    /// Items in stored (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items in display order: ascending expiry date, stable for equal
    /// dates.
    ///
    /// Recomputed per call; the stored order is never mutated.
    pub fn sorted_for_display(&self) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        view.sort_by_key(|item| item.expiry_date);
        view
    }

    /// Appends one new item and persists the updated list.
    ///
    /// Pure append: existing items and their stored order are unaffected.
    /// An empty `name` is rejected with no state change and no write. If
    /// the persist fails the in-memory append is kept and the store error
    /// is returned.
    pub fn add_item(
        &mut self,
        name: &str,
        expiry_date: NaiveDate,
        notes: &str,
    ) -> Result<ItemId, TrackerError> {
        let item = Item::new(name, expiry_date, notes)?;
        let id = item.id;
        self.items.push(item);
        self.persist()?;

        info!(
            "event=item_add module=view status=ok id={id} items={}",
            self.items.len()
        );
        Ok(id)
    }

    /// Removes the item with `id`, if present, and persists.
    ///
    /// Unknown ids are an idempotent no-op (`Ok(false)`), not an error, and
    /// trigger no write.
    pub fn delete_item(&mut self, id: ItemId) -> Result<bool, TrackerError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;

        info!(
            "event=item_delete module=view status=ok id={id} items={}",
            self.items.len()
        );
        Ok(true)
    }

    /// Full-replace write of the current list to the snapshot store.
    ///
    /// Private: only reachable from the ready-state mutations above.
    fn persist(&self) -> Result<(), TrackerError> {
        self.store.save(&self.items)?;
        Ok(())
    }
}
