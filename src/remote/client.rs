use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use super::error::{RemoteError, service_error};

/// A row as returned by the service: a schemaless JSON object. Category
/// specifications name the columns of interest, so nothing here is typed per
/// table.
pub type Row = serde_json::Map<String, Value>;

/// Media type that asks the service for exactly one object instead of an
/// array of rows.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Connection settings for the hosted tabular API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the REST endpoint, e.g. `https://host/rest/v1/`.
    pub endpoint: Url,
    /// Static API key sent with every request.
    pub api_key: String,
    /// Per-request timeout. A hung request degrades into a per-category
    /// failure instead of blocking a search cycle's join forever.
    pub request_timeout: Duration,
}

/// Thin client over the service's REST surface.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let mut headers = HeaderMap::new();
        let mut key =
            HeaderValue::from_str(&config.api_key).map_err(|_| RemoteError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| RemoteError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()?;

        // `Url::join` treats a base without a trailing slash as a file,
        // dropping the last path segment.
        let mut base = config.endpoint.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self { http, base })
    }

    /// Start a read query against a table.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            params: Vec::new(),
            single: false,
        }
    }

    /// Insert rows into a table. `body` follows the SDK convention of an
    /// array of objects.
    pub async fn insert(&self, table: &str, body: &Value) -> Result<(), RemoteError> {
        let url = self.table_url(table)?;
        let response = self
            .http
            .post(url)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(service_error(status, &body))
    }

    fn table_url(&self, table: &str) -> Result<Url, RemoteError> {
        Ok(self.base.join(table)?)
    }
}

/// Builder for a filtered select, mirroring the hosted SDK's query surface
/// (`select`, `ilike`, `eq`, `limit`, `single`).
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a Client,
    table: String,
    params: Vec<(String, String)>,
    single: bool,
}

impl<'a> TableQuery<'a> {
    /// Restrict the returned columns.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Case-insensitive substring match on a column.
    pub fn ilike(mut self, column: &str, needle: &str) -> Self {
        self.params
            .push((column.to_string(), format!("ilike.*{needle}*")));
        self
    }

    /// Equality filter on a column.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// Ask for a single object instead of an array.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Query-string pairs this builder will send.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.params
    }

    /// Execute the query, returning all matching rows.
    pub async fn fetch(self) -> Result<Vec<Row>, RemoteError> {
        let body = self.send().await?;
        match body {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Execute a single-object query. Zero matching rows is not an error; it
    /// yields `None`.
    pub async fn fetch_single(mut self) -> Result<Option<Row>, RemoteError> {
        self.single = true;
        let body = self.send().await?;
        match body {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    async fn send(&self) -> Result<Option<String>, RemoteError> {
        let url = self.client.table_url(&self.table)?;
        let mut request = self.client.http.get(url).query(&self.params);
        if self.single {
            request = request.header(ACCEPT, SINGLE_OBJECT);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(Some(response.text().await?));
        }

        // A single-object request with no matching row answers 406; callers
        // asked "the one active row, if any", so that is an absence.
        if self.single && status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }

        let body = response.text().await.unwrap_or_default();
        Err(service_error(status, &body))
    }
}
