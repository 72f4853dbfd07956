//! Expiry classification and display formatting.
//!
//! # Responsibility
//! - Bucket an expiry date into expired / expiring-soon / fresh for row
//!   styling.
//! - Render stored dates in the fixed human-readable display format.
//!
//! # Invariants
//! - Classification is a pure function of `(expiry_date, today)`; it never
//!   reads a clock, so callers must re-evaluate it on every render.
//! - Formatting never alters the stored date value.
//!
//! Day arithmetic works in whole calendar days. Callers are expected to
//! derive `today` from their local calendar date once per render; the core
//! takes no position on timezones beyond that.

use chrono::NaiveDate;

/// Days from today (inclusive) within which an item counts as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 7;

/// Display bucket derived from days-until-expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// Expiry date lies in the past.
    Expired,
    /// Expires today or within the soon-window.
    ExpiringSoon,
    /// Expiry is at least the soon-window away.
    Fresh,
}

/// Signed whole-day difference `expiry_date - today`.
pub fn days_until(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    expiry_date.signed_duration_since(today).num_days()
}

/// Classifies an expiry date relative to `today`.
///
/// - difference < 0 days -> `Expired`
/// - 0 <= difference < 7 days -> `ExpiringSoon`
/// - difference >= 7 days -> `Fresh`
pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    let days = days_until(expiry_date, today);
    if days < 0 {
        ExpiryStatus::Expired
    } else if days < EXPIRING_SOON_WINDOW_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Fresh
    }
}

/// Renders a stored date for display, e.g. `05 Jan 2025`.
pub fn format_expiry_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
