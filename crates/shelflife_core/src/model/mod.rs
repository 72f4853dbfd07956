//! Domain model for tracked items.
//!
//! # Responsibility
//! - Define the canonical item record and its creation invariants.
//! - Provide the pure expiry classification used for display styling.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Items are immutable after creation; removal is the only lifecycle exit.

pub mod expiry;
pub mod item;
