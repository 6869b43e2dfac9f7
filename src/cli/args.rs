use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use sitesearch::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("sitesearch {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

/// Output format for results printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "sitesearch",
    version,
    long_version = long_version(),
    about = "Interactive live search over hosted site content",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `sitesearch` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SITESEARCH_CONFIG",
        action = clap::ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "URL",
        env = "SITESEARCH_ENDPOINT",
        help = "Base URL of the content API (default: from configuration)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "SITESEARCH_API_KEY",
        hide_env_values = true,
        help = "API key sent with every request (default: from configuration)"
    )]
    pub(crate) api_key: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long,
        requires = "query",
        help = "Run a single uncapped papers search for --query and exit"
    )]
    pub(crate) once: bool,
    #[arg(long, help = "Print the currently active site banner and exit")]
    pub(crate) banner: bool,
    #[arg(
        long,
        value_name = "EMAIL",
        help = "Subscribe an email address to the newsletter and exit"
    )]
    pub(crate) subscribe: Option<String>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for printed results (default: plain)"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: built-in)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "debounce-ms",
        value_name = "MILLIS",
        help = "Quiet interval before a search fires (default: 300)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        long = "min-query-len",
        value_name = "CHARS",
        help = "Minimum query length before searching (default: 2)"
    )]
    pub(crate) min_query_len: Option<usize>,
    #[arg(
        short = 'l',
        long,
        value_name = "COUNT",
        help = "Result cap per category in interactive mode (default: 5)"
    )]
    pub(crate) limit: Option<u32>,
    #[arg(
        long = "timeout-ms",
        value_name = "MILLIS",
        help = "Per-request timeout (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(long, help = "Print the effective configuration before running")]
    pub(crate) print_config: bool,
}
