//! Core domain logic for ShelfLife, an expiry-date tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::expiry::{
    classify, days_until, format_expiry_date, ExpiryStatus, EXPIRING_SOON_WINDOW_DAYS,
};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use store::{
    MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult, SNAPSHOT_KEY,
};
pub use view::tracker_view::{TrackerError, TrackerView};
