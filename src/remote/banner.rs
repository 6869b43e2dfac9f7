use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::Client;
use super::error::RemoteError;

const BANNERS_TABLE: &str = "banners";
const DEFAULT_BUTTON_TEXT: &str = "Learn More";

/// Promotional banner content maintained by the site editors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub button_url: Option<String>,
    pub button_text: Option<String>,
}

impl Banner {
    /// Label for the call-to-action button; the editors may leave it blank.
    pub fn button_label(&self) -> &str {
        self.button_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_BUTTON_TEXT)
    }
}

/// Fetch the currently active banner, if the editors enabled one.
///
/// At most one banner is active at a time, so this uses single-object
/// semantics; no active row is an ordinary `None`, not an error.
pub async fn fetch_active_banner(client: &Client) -> Result<Option<Banner>, RemoteError> {
    let row = client
        .from(BANNERS_TABLE)
        .select("*")
        .eq("is_active", "true")
        .fetch_single()
        .await?;

    match row {
        Some(row) => Ok(Some(serde_json::from_value(Value::Object(row))?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_defaults_when_unset_or_empty() {
        let mut banner = Banner {
            title: Some("Annual report".to_string()),
            description: None,
            image_url: None,
            button_url: Some("/resources/".to_string()),
            button_text: None,
        };
        assert_eq!(banner.button_label(), "Learn More");

        banner.button_text = Some(String::new());
        assert_eq!(banner.button_label(), "Learn More");

        banner.button_text = Some("Read it".to_string());
        assert_eq!(banner.button_label(), "Read it");
    }
}
