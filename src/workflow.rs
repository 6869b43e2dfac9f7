//! Bridge between resolved settings and the library's operations.
//!
//! Interactive search runs its own worker-owned runtime; the one-shot
//! operations (papers search, banner fetch, newsletter subscription) borrow a
//! current-thread runtime held here instead.

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use sitesearch::remote::{self, Banner, Client, SubscribeOutcome};
use sitesearch::search::{PaperResult, run_paper_search};
use sitesearch::ui::{self, SearchOutcome, UiOptions};

use crate::settings::ResolvedConfig;

pub(crate) struct Workflow {
    client: Client,
    settings: ResolvedConfig,
}

impl Workflow {
    pub(crate) fn from_config(settings: ResolvedConfig) -> Result<Self> {
        let client = Client::new(&settings.remote).context("failed to build remote client")?;
        Ok(Self { client, settings })
    }

    /// Run the interactive live search session.
    pub(crate) fn run_interactive(&self) -> Result<SearchOutcome> {
        let options = UiOptions {
            input_title: self.settings.input_title.clone(),
            initial_query: self.settings.initial_query.clone(),
            tuning: self.settings.tuning,
        };
        ui::run(&self.client, options)
    }

    /// Run the uncapped papers search once and return its results.
    pub(crate) fn run_once(&self, query: &str) -> Result<Vec<PaperResult>> {
        let runtime = oneshot_runtime()?;
        runtime
            .block_on(run_paper_search(&self.client, query))
            .context("papers search failed")
    }

    /// Fetch the active banner, if any.
    pub(crate) fn fetch_banner(&self) -> Result<Option<Banner>> {
        let runtime = oneshot_runtime()?;
        runtime
            .block_on(remote::fetch_active_banner(&self.client))
            .context("banner fetch failed")
    }

    /// Subscribe an email address to the newsletter.
    pub(crate) fn subscribe(&self, email: &str) -> Result<SubscribeOutcome> {
        let runtime = oneshot_runtime()?;
        runtime
            .block_on(remote::subscribe(&self.client, email))
            .context("newsletter subscription failed")
    }
}

fn oneshot_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")
}
