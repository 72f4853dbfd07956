//! Item domain model.
//!
//! # Responsibility
//! - Define the record for a single tracked object: name, expiry date, note.
//! - Enforce creation invariants shared by live input and persisted data.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `name` is never empty or whitespace-only.
//! - No update operation exists; an item only ever leaves the list whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// A single tracked object with a name, expiry date and optional note.
///
/// The wire shape is `{ "id", "name", "expiryDate", "notes" }`, with
/// `expiryDate` encoded as an ISO-8601 date string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique token derived from the creation timestamp (UUIDv7).
    pub id: ItemId,
    /// Display name. Never empty.
    pub name: String,
    /// Expiry calendar date.
    #[serde(rename = "expiryDate")]
    pub expiry_date: NaiveDate,
    /// Free-text note. May be empty.
    pub notes: String,
}

/// Validation failures for item construction and persisted item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `id` is the nil UUID.
    NilId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::NilId => write!(f, "item id must not be the nil uuid"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates a new item with a freshly generated stable ID.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        expiry_date: NaiveDate,
        notes: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::now_v7(), name, expiry_date, notes)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used where identity already exists, e.g. when rebuilding items from
    /// a persisted snapshot.
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        expiry_date: NaiveDate,
        notes: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            name: name.into(),
            expiry_date,
            notes: notes.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Re-checks invariants on an already-built value.
    ///
    /// Deserialization bypasses the constructors, so snapshot decoding must
    /// call this for every item it admits.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        Ok(())
    }
}
