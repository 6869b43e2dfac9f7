//! Configuration loading.
//!
//! Values are layered, lowest precedence first: the user-level config file,
//! a project-local `sitesearch.toml` in the working directory, any files
//! named with `--config`, environment variables under the `SITESEARCH__`
//! prefix, and finally CLI flags applied as overrides on the deserialized
//! result.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use sitesearch::app_dirs;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;

const ENV_PREFIX: &str = "sitesearch";
const LOCAL_FILE: &str = "sitesearch.toml";

/// Combine every configuration layer into the validated application settings.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    // Files named explicitly must exist; silently skipping one would hide a
    // typo behind whatever the other layers happen to contain.
    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let mut raw: RawConfig = builder
        .build()
        .context("failed to read configuration")?
        .try_deserialize()
        .context("failed to deserialize configuration")?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

/// Optional configuration files, lowest precedence first.
fn default_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }
    if let Ok(dir) = env::current_dir() {
        files.push(dir.join(LOCAL_FILE));
    }

    files
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;

    #[test]
    fn working_directory_file_overrides_the_user_config() {
        let files = default_files();
        let local = files
            .iter()
            .position(|path| path.ends_with(LOCAL_FILE))
            .expect("local file is consulted");
        // Later sources win, so the project-local file must come last.
        assert_eq!(local, files.len() - 1);
    }

    #[test]
    fn config_files_and_cli_overrides_merge_into_resolved_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[remote]
endpoint = "https://example.test/rest/v1"
api_key = "anon-key"

[search]
debounce_ms = 200
"#,
        )
        .expect("write config file");

        let cli = CliArgs::try_parse_from([
            "sitesearch",
            "--no-config",
            "--config",
            path.to_str().expect("utf8 path"),
            "--limit",
            "2",
        ])
        .expect("parse cli");

        let resolved = load(&cli).expect("load settings");
        assert_eq!(resolved.remote.api_key, "anon-key");
        assert_eq!(resolved.tuning.debounce, Duration::from_millis(200));
        assert_eq!(resolved.tuning.per_category_limit, 2);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let cli = CliArgs::try_parse_from([
            "sitesearch",
            "--no-config",
            "--config",
            missing.to_str().expect("utf8 path"),
        ])
        .expect("parse cli");
        assert!(load(&cli).is_err());
    }

    #[test]
    fn missing_endpoint_is_rejected() {
        let cli = CliArgs::try_parse_from(["sitesearch", "--no-config", "--api-key", "anon-key"])
            .expect("parse cli");
        assert!(load(&cli).is_err());
    }
}
