//! SQLite-backed snapshot store.
//!
//! # Responsibility
//! - Persist the serialized item list under the fixed key in the
//!   `snapshots` table.
//! - Keep SQL details inside this persistence boundary.
//!
//! # Invariants
//! - `save` fully replaces the stored value (upsert on the fixed key).
//! - `load` never masks a malformed stored value as an empty list.

use super::{decode_snapshot, encode_snapshot, SnapshotStore, StoreResult, SNAPSHOT_KEY};
use crate::model::item::Item;
use rusqlite::{params, Connection, OptionalExtension};

/// Snapshot store over an opened, migrated SQLite connection.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self) -> StoreResult<Option<Vec<Item>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(text) => Ok(Some(decode_snapshot(&text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        let encoded = encode_snapshot(items)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![SNAPSHOT_KEY, encoded],
        )?;
        Ok(())
    }
}
