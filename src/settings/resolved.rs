use sitesearch::remote::RemoteConfig;
use sitesearch::search::SearchTuning;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) remote: RemoteConfig,
    pub(crate) tuning: SearchTuning,
    pub(crate) input_title: Option<String>,
    pub(crate) initial_query: Option<String>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Endpoint: {}", self.remote.endpoint);
        println!("  Api key: {}", mask(&self.remote.api_key));
        println!(
            "  Request timeout: {} ms",
            self.remote.request_timeout.as_millis()
        );
        println!("  Debounce: {} ms", self.tuning.debounce.as_millis());
        println!("  Minimum query length: {}", self.tuning.min_query_len);
        println!("  Per-category limit: {}", self.tuning.per_category_limit);
        match &self.input_title {
            Some(title) => println!("  Input title: {title}"),
            None => println!("  Input title: (default)"),
        }
        match &self.initial_query {
            Some(query) => println!("  Initial query: {query}"),
            None => println!("  Initial query: (empty)"),
        }
    }
}

/// Keep only a short prefix of the key so summaries never leak it.
fn mask(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}…")
}
