use super::merge::MergedResults;

/// Messages accepted by the background search worker.
pub enum SearchCommand {
    /// Run a full fan-out for `query`. `id` is the query generation; the UI
    /// drops any batch whose generation is no longer current.
    Query { id: u64, query: String },
    Shutdown,
}

/// What a completed cycle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Results(MergedResults),
    /// Nothing settled successfully; the panel shows the error sentinel.
    Failed,
}

/// A settled search cycle, tagged with its query generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBatch {
    pub id: u64,
    pub query: String,
    pub outcome: BatchOutcome,
}
