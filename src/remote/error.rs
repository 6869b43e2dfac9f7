use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Postgres unique-violation code, reported by the service on duplicate
/// inserts.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors produced when talking to the hosted tabular API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Service {
        status: StatusCode,
        /// Database error code extracted from the response body, when present.
        code: Option<String>,
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint or a derived table URL is not a valid URL.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// The configured API key contains bytes that cannot go into a header.
    #[error("api key is not a valid header value")]
    InvalidApiKey,
}

impl RemoteError {
    /// Whether this error is a duplicate-key rejection from the database.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            RemoteError::Service { code: Some(code), .. } if code == UNIQUE_VIOLATION
        )
    }

    /// HTTP status of the service response, when the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape returned by the service.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Build a [`RemoteError::Service`] from a failed response's status and body.
pub(super) fn service_error(status: StatusCode, body: &str) -> RemoteError {
    let parsed: Option<ServiceErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(parsed) => (
            parsed.code,
            parsed.message.unwrap_or_else(|| body.to_string()),
        ),
        None => (None, body.to_string()),
    };
    RemoteError::Service {
        status,
        code,
        message,
    }
}
