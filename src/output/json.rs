//! JSON output formatter.
//!
//! The document is the result set itself: file → bucket → `[line, text]`
//! pairs. All four buckets are present for every file, empty or not.

use crate::finding::ScanResultSet;

/// Formats a [`ScanResultSet`] as pretty-printed JSON.
///
/// An empty set renders as `{}`.
///
/// # Panics
///
/// Panics if the result set cannot be serialized (should not happen: every
/// key is a string and every value a number or string).
pub fn format(results: &ScanResultSet) -> String {
    serde_json::to_string_pretty(results).expect("JSON serialization failed")
}
