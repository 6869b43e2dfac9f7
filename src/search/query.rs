//! Query validation and search tuning knobs.

use std::time::Duration;

/// Queries shorter than this (after trimming) are suppressed entirely.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Quiet interval after the last edit before a search is dispatched.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Rows requested per category in the interactive aggregator.
pub const DEFAULT_PER_CATEGORY_LIMIT: u32 = 5;

/// Tunable behavior of the live search session.
#[derive(Debug, Clone, Copy)]
pub struct SearchTuning {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub per_category_limit: u32,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            per_category_limit: DEFAULT_PER_CATEGORY_LIMIT,
        }
    }
}

/// Trim the raw input and apply the minimum-length gate.
///
/// `None` means "do not search": the panel clears instead of showing an
/// error.
pub fn validate(raw: &str, min_len: usize) -> Option<&str> {
    let query = raw.trim();
    if query.chars().count() >= min_len {
        Some(query)
    } else {
        None
    }
}
