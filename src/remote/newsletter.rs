use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use thiserror::Error;

use super::client::Client;
use super::error::RemoteError;

const SUBSCRIBERS_TABLE: &str = "newsletter_subscribers";

/// Loose shape check only; the service enforces uniqueness and the mail
/// provider enforces deliverability.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Result of a subscription attempt that reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Trim, lowercase, and shape-check an email address.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if EMAIL_RE.is_match(&email) {
        Some(email)
    } else {
        None
    }
}

/// Subscribe an address to the newsletter.
///
/// A duplicate-key rejection means the address is already on the list, which
/// callers report differently from a real failure.
pub async fn subscribe(client: &Client, raw: &str) -> Result<SubscribeOutcome, SubscribeError> {
    let email =
        normalize_email(raw).ok_or_else(|| SubscribeError::InvalidEmail(raw.trim().to_string()))?;

    insert_outcome(
        client
            .insert(SUBSCRIBERS_TABLE, &json!([{ "email": email }]))
            .await,
    )
}

/// Interpret the insert's result: a duplicate-key rejection is the
/// "already subscribed" outcome, anything else propagates.
fn insert_outcome(result: Result<(), RemoteError>) -> Result<SubscribeOutcome, SubscribeError> {
    match result {
        Ok(()) => Ok(SubscribeOutcome::Subscribed),
        Err(err) if err.is_unique_violation() => Ok(SubscribeOutcome::AlreadySubscribed),
        Err(err) => Err(err.into()),
    }
}
