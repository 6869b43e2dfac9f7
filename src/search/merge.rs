//! Labeling and concatenation of per-category results.

use super::category::CategorySpec;
use super::dispatch::CategoryOutcome;

/// One row of the results panel: what to show and where it navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub label: String,
    /// Source tag, e.g. `Paper`.
    pub category: &'static str,
    pub url: String,
}

impl SearchHit {
    fn from_row(spec: &CategorySpec, row: &crate::remote::Row) -> Self {
        Self {
            label: spec.label_for(row),
            category: spec.name,
            url: spec.link.target(row),
        }
    }
}

/// A completed cycle's merged results. The no-results case is a distinct
/// sentinel so the panel never renders an unstyled empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedResults {
    Hits(Vec<SearchHit>),
    Empty,
}

/// Concatenate every category's rows into one labeled list.
///
/// Outcomes arrive in presentation order and stay that way; a failed category
/// simply contributes nothing (the dispatcher already logged it).
pub fn merge(outcomes: &[CategoryOutcome<'_>]) -> MergedResults {
    let mut hits = Vec::new();
    for outcome in outcomes {
        let Ok(rows) = &outcome.rows else { continue };
        hits.extend(rows.iter().map(|row| SearchHit::from_row(outcome.spec, row)));
    }

    if hits.is_empty() {
        MergedResults::Empty
    } else {
        MergedResults::Hits(hits)
    }
}
