//! Static description of the searchable content sources.
//!
//! Every category names its table, the column matched against the query, the
//! column used as the display label, and how to build the navigation target
//! for a hit. The set and its order are fixed at compile time; merged results
//! always present categories in this order regardless of which request
//! settles first.

use serde_json::Value;
use url::form_urlencoded;

use crate::remote::Row;

/// How a category turns a matching row into a navigation URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTemplate {
    /// A page addressed by the row's `id`, e.g. `/resources/?id={id}`.
    WithId(&'static str),
    /// A fixed page or anchor shared by every hit in the category.
    Fixed(&'static str),
}

impl LinkTemplate {
    /// Build the navigation URL for a row.
    pub fn target(&self, row: &Row) -> String {
        match self {
            LinkTemplate::WithId(prefix) => {
                format!("{prefix}{}", row_id(row))
            }
            LinkTemplate::Fixed(url) => (*url).to_string(),
        }
    }
}

/// Render a row's identifier for URL interpolation. Identifiers are numeric
/// in practice but the service does not promise that.
fn row_id(row: &Row) -> String {
    match row.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// One searchable content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    /// Tag shown next to each hit, e.g. `Paper`.
    pub name: &'static str,
    /// Table queried for this category.
    pub table: &'static str,
    /// Columns requested from the service.
    pub columns: &'static str,
    /// Column matched (case-insensitively) against the query.
    pub match_column: &'static str,
    /// Column used as the hit's display label.
    pub label_column: &'static str,
    /// Shown when the label column is absent or empty.
    pub placeholder: &'static str,
    pub link: LinkTemplate,
}

impl CategorySpec {
    /// Display label for a row, falling back to the category placeholder.
    pub fn label_for(&self, row: &Row) -> String {
        match row.get(self.label_column) {
            Some(Value::String(label)) if !label.is_empty() => label.clone(),
            _ => self.placeholder.to_string(),
        }
    }
}

const CATEGORIES: [CategorySpec; 4] = [
    CategorySpec {
        name: "Paper",
        table: "papers",
        columns: "id, title",
        match_column: "title",
        label_column: "title",
        placeholder: "Untitled paper",
        link: LinkTemplate::WithId("/resources/?id="),
    },
    CategorySpec {
        name: "Gallery",
        table: "gallery",
        columns: "id, title",
        match_column: "title",
        label_column: "title",
        placeholder: "Gallery image",
        link: LinkTemplate::Fixed("/gallery/"),
    },
    CategorySpec {
        name: "Initiative",
        table: "initiatives",
        columns: "id, title",
        match_column: "title",
        label_column: "title",
        placeholder: "Untitled initiative",
        link: LinkTemplate::WithId("/initiatives.html?id="),
    },
    CategorySpec {
        name: "Team",
        table: "team_members",
        columns: "id, name",
        match_column: "name",
        label_column: "name",
        placeholder: "Unknown Author",
        link: LinkTemplate::Fixed("/#team-grid"),
    },
];

/// The searchable categories, in presentation order.
pub fn categories() -> &'static [CategorySpec] {
    &CATEGORIES
}

/// URL of the full search page for a query, used when the user submits the
/// query itself rather than picking a hit.
pub fn search_page_url(query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("/search/?q={encoded}")
}
