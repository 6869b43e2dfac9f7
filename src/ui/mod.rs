//! Terminal front-end for the live search session.
//!
//! The UI owns the debounce gate and the results panel; everything network
//! facing happens on the background worker spawned by [`run`].

pub mod components;
pub mod panel;

mod actions;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;

use anyhow::Result;

use crate::remote::Client;
use crate::search::{SearchTuning, remote_sources, spawn};

pub use outcome::{SearchOutcome, SearchSelection};
pub use panel::{PanelState, PanelView};
pub use state::App;

/// Presentation options for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
    /// Title of the input box; defaults to a built-in prompt.
    pub input_title: Option<String>,
    /// Query preloaded into the input on startup.
    pub initial_query: Option<String>,
    pub tuning: SearchTuning,
}

/// Run an interactive search session against the hosted service and block
/// until the user accepts a result or cancels.
pub fn run(client: &Client, options: UiOptions) -> Result<SearchOutcome> {
    let sources = remote_sources(client);
    let limit = Some(options.tuning.per_category_limit);
    let (command_tx, batch_rx, latest_query_id) = spawn(sources, limit)?;
    let mut app = App::new(command_tx, batch_rx, latest_query_id, options);
    app.run()
}
