//! Non-interactive paper search.
//!
//! The site's dedicated search page queries only the `papers` table, with
//! full rows and no result cap. This module is that variant: given a query
//! from the command line, fetch every matching paper and present it with the
//! documented defaults for missing optional fields.

use serde::Serialize;
use serde_json::Value;

use crate::remote::{Client, RemoteError, Row};

const PAPERS_TABLE: &str = "papers";

const DEFAULT_CATEGORY: &str = "Paper";
const DEFAULT_AUTHOR: &str = "Unknown";
const DEFAULT_DATE: &str = "No Date";

/// A paper as shown on the search results page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaperResult {
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub pdf_url: Option<String>,
}

impl PaperResult {
    fn from_row(row: &Row) -> Self {
        Self {
            title: text_field(row, "title").unwrap_or_else(|| "Untitled paper".to_string()),
            category: text_field(row, "category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            author: text_field(row, "author").unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            date: text_field(row, "date").unwrap_or_else(|| DEFAULT_DATE.to_string()),
            pdf_url: text_field(row, "pdf_url"),
        }
    }
}

/// Non-empty string value of a column, if present.
fn text_field(row: &Row, column: &str) -> Option<String> {
    match row.get(column) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Run the uncapped papers title search.
pub async fn run_paper_search(
    client: &Client,
    query: &str,
) -> Result<Vec<PaperResult>, RemoteError> {
    let rows = client
        .from(PAPERS_TABLE)
        .select("*")
        .ilike("title", query)
        .fetch()
        .await?;

    Ok(rows.iter().map(PaperResult::from_row).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn missing_optionals_use_documented_defaults() {
        let paper = PaperResult::from_row(&row(json!({"id": 1, "title": "Reef health"})));
        assert_eq!(paper.title, "Reef health");
        assert_eq!(paper.category, "Paper");
        assert_eq!(paper.author, "Unknown");
        assert_eq!(paper.date, "No Date");
        assert_eq!(paper.pdf_url, None);
    }

    #[test]
    fn present_fields_pass_through() {
        let paper = PaperResult::from_row(&row(json!({
            "id": 1,
            "title": "Reef health",
            "category": "Marine Biology",
            "author": "A. Smith",
            "date": "2024-03-01",
            "pdf_url": "/papers/reef-health.pdf",
        })));
        assert_eq!(paper.category, "Marine Biology");
        assert_eq!(paper.author, "A. Smith");
        assert_eq!(paper.date, "2024-03-01");
        assert_eq!(paper.pdf_url.as_deref(), Some("/papers/reef-health.pdf"));
    }
}
