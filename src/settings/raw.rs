use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use url::Url;

use sitesearch::remote::RemoteConfig;
use sitesearch::search::SearchTuning;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    remote: RemoteSection,
    search: SearchSection,
    ui: UiSection,
}

/// Connection options for the hosted content API as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RemoteSection {
    endpoint: Option<String>,
    api_key: Option<String>,
    request_timeout_ms: Option<u64>,
}

/// Live search behavior prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    debounce_ms: Option<u64>,
    min_query_len: Option<usize>,
    per_category_limit: Option<u32>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.remote.endpoint = Some(endpoint);
        }
        if let Some(key) = cli.api_key.clone() {
            self.remote.api_key = Some(key);
        }
        if let Some(timeout) = cli.timeout_ms {
            self.remote.request_timeout_ms = Some(timeout);
        }

        if let Some(debounce) = cli.debounce_ms {
            self.search.debounce_ms = Some(debounce);
        }
        if let Some(min_len) = cli.min_query_len {
            self.search.min_query_len = Some(min_len);
        }
        if let Some(limit) = cli.limit {
            self.search.per_category_limit = Some(limit);
        }

        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
    }

    /// Validate the combined values and produce the application settings.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let endpoint = self.remote.endpoint.context(
            "no endpoint configured; set [remote] endpoint, --endpoint, or SITESEARCH_ENDPOINT",
        )?;
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("invalid endpoint url '{endpoint}'"))?;
        let api_key = self.remote.api_key.context(
            "no api key configured; set [remote] api_key, --api-key, or SITESEARCH_API_KEY",
        )?;
        ensure!(!api_key.trim().is_empty(), "api key must not be empty");

        let request_timeout = Duration::from_millis(
            self.remote
                .request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        );
        ensure!(
            !request_timeout.is_zero(),
            "request timeout must be greater than zero"
        );

        let defaults = SearchTuning::default();
        let min_query_len = self.search.min_query_len.unwrap_or(defaults.min_query_len);
        ensure!(min_query_len >= 1, "minimum query length must be at least 1");
        let per_category_limit = self
            .search
            .per_category_limit
            .unwrap_or(defaults.per_category_limit);
        ensure!(
            per_category_limit >= 1,
            "per-category limit must be at least 1"
        );

        let tuning = SearchTuning {
            debounce: self
                .search
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
            min_query_len,
            per_category_limit,
        };

        Ok(ResolvedConfig {
            remote: RemoteConfig {
                endpoint,
                api_key,
                request_timeout,
            },
            tuning,
            input_title: self.ui.input_title,
            initial_query: self.ui.initial_query,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["sitesearch"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).expect("valid arguments")
    }

    fn raw_with_endpoint() -> RawConfig {
        RawConfig {
            remote: RemoteSection {
                endpoint: Some("https://example.test/rest/v1".to_string()),
                api_key: Some("anon-key".to_string()),
                request_timeout_ms: None,
            },
            ..RawConfig::default()
        }
    }

    #[test]
    fn defaults_apply_when_sections_are_absent() {
        let resolved = raw_with_endpoint().resolve().expect("resolve");
        assert_eq!(resolved.tuning.debounce, Duration::from_millis(300));
        assert_eq!(resolved.tuning.min_query_len, 2);
        assert_eq!(resolved.tuning.per_category_limit, 5);
        assert_eq!(resolved.remote.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn cli_values_override_file_values() {
        let mut raw = raw_with_endpoint();
        raw.search.debounce_ms = Some(1_000);

        raw.apply_cli_overrides(&cli(&[
            "--debounce-ms",
            "150",
            "--limit",
            "3",
            "-q",
            "reef",
        ]));
        let resolved = raw.resolve().expect("resolve");

        assert_eq!(resolved.tuning.debounce, Duration::from_millis(150));
        assert_eq!(resolved.tuning.per_category_limit, 3);
        assert_eq!(resolved.initial_query.as_deref(), Some("reef"));
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let err = RawConfig::default().resolve().expect_err("must fail");
        assert!(err.to_string().contains("no endpoint configured"));
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let mut raw = raw_with_endpoint();
        raw.remote.endpoint = Some("not a url".to_string());
        let err = raw.resolve().expect_err("must fail");
        assert!(err.to_string().contains("invalid endpoint url"));
    }

    #[test]
    fn zero_minimum_query_length_is_rejected() {
        let mut raw = raw_with_endpoint();
        raw.search.min_query_len = Some(0);
        assert!(raw.resolve().is_err());
    }
}
