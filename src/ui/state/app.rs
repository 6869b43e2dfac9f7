//! Core state container for the terminal front-end.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::mpsc::{Receiver, Sender};

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::search::{SearchBatch, SearchCommand, SearchTuning};
use crate::ui::UiOptions;
use crate::ui::components::QueryInput;
use crate::ui::panel::PanelState;

use super::SearchRuntime;

impl Drop for App<'_> {
    fn drop(&mut self) {
        self.search.shutdown();
    }
}

/// Aggregate state shared across the terminal UI: the query input, the
/// results panel, and the session bookkeeping that talks to the background
/// worker.
pub struct App<'a> {
    pub(crate) input: QueryInput<'a>,
    pub(crate) panel: PanelState,
    pub(crate) list_state: ListState,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) input_title: Option<String>,
    pub(crate) tuning: SearchTuning,
    pub(in crate::ui) search: SearchRuntime,
}

impl App<'_> {
    pub fn new(
        command_tx: Sender<SearchCommand>,
        batch_rx: Receiver<SearchBatch>,
        latest_query_id: Arc<AtomicU64>,
        options: UiOptions,
    ) -> Self {
        let search = SearchRuntime::new(
            command_tx,
            batch_rx,
            latest_query_id,
            options.tuning.debounce,
        );

        let mut app = Self {
            input: QueryInput::new(options.initial_query.as_deref()),
            panel: PanelState::Idle,
            list_state: ListState::default(),
            throbber_state: ThrobberState::default(),
            input_title: options.input_title,
            tuning: options.tuning,
            search,
        };

        // A preloaded query behaves like the user just typed it.
        if !app.input.text().is_empty() {
            app.on_edit();
        }
        app
    }

    /// Index of the selected hit, when the panel has hits.
    pub(crate) fn selected_hit(&self) -> Option<usize> {
        let count = self.panel.hit_count();
        if count == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(count - 1))
    }

    /// Keep the selection inside the current hit list.
    pub(crate) fn ensure_selection(&mut self) {
        let selection = self.selected_hit();
        self.list_state.select(selection);
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        let count = self.panel.hit_count();
        if count == 0 {
            return;
        }
        let current = self.selected_hit().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(count as isize) as usize;
        self.list_state.select(Some(next));
    }
}
