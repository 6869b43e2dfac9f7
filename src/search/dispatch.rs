//! Concurrent fan-out across the category sources.
//!
//! One request per category, all in flight at once, joined as a batch: the
//! dispatcher returns only after every request settled, successfully or not.
//! Failures stay per-category: a source that errors contributes an explicit
//! `Err` to the batch rather than aborting its siblings.

use futures::future::join_all;
use tracing::warn;

use crate::remote::{RemoteError, Row};

use super::category::CategorySpec;
use super::source::CategorySource;

/// What one category contributed to a search cycle.
pub struct CategoryOutcome<'a> {
    pub spec: &'a CategorySpec,
    pub rows: Result<Vec<Row>, RemoteError>,
}

/// Fan out `query` to every source and wait for all of them to settle.
///
/// The returned outcomes preserve source order, independent of completion
/// order. Failed categories are logged here; the caller decides how partial
/// results render.
pub async fn dispatch<'a>(
    sources: &'a [Box<dyn CategorySource>],
    query: &str,
    limit: Option<u32>,
) -> Vec<CategoryOutcome<'a>> {
    let requests = sources.iter().map(|source| async move {
        let rows = source.search(query, limit).await;
        if let Err(err) = &rows {
            warn!(
                category = source.spec().name,
                error = %err,
                "category search failed"
            );
        }
        CategoryOutcome {
            spec: source.spec(),
            rows,
        }
    });

    join_all(requests).await
}
