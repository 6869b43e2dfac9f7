use crate::search::SearchHit;

/// What the user navigated to when the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSelection {
    /// A specific result row.
    Hit(SearchHit),
    /// The full search page for the query itself, used when the user submits
    /// the query without picking a row.
    SearchPage { url: String },
}

impl SearchSelection {
    pub fn url(&self) -> &str {
        match self {
            SearchSelection::Hit(hit) => &hit.url,
            SearchSelection::SearchPage { url } => url,
        }
    }
}

/// Final state of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// False when the user cancelled instead of accepting a target.
    pub accepted: bool,
    /// Query text at the moment the session ended.
    pub query: String,
    pub selection: Option<SearchSelection>,
}

impl SearchOutcome {
    pub fn cancelled(query: String) -> Self {
        Self {
            accepted: false,
            query,
            selection: None,
        }
    }

    pub fn accepted(query: String, selection: SearchSelection) -> Self {
        Self {
            accepted: true,
            query,
            selection: Some(selection),
        }
    }
}
