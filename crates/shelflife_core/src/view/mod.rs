//! Tracker view state and use-case operations.
//!
//! # Responsibility
//! - Own the in-memory item list and its injected snapshot store.
//! - Apply create/delete changes and persist after each accepted change.
//!
//! # Invariants
//! - The view is the only reader and writer of its snapshot store.

pub mod tracker_view;
