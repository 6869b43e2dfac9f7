//! Key handling for the interactive session.

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::search::{search_page_url, validate};
use crate::ui::panel::PanelState;

use super::outcome::{SearchOutcome, SearchSelection};
use super::state::App;

impl App<'_> {
    /// Handle one key press. `Some(outcome)` ends the session.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(SearchOutcome::cancelled(self.input.text().to_string())));
        }

        match key.code {
            KeyCode::Esc => Ok(self.close_or_cancel()),
            KeyCode::Enter => Ok(self.accept()),
            KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            _ => {
                if self.input.handle_key(key) {
                    self.on_edit();
                }
                Ok(None)
            }
        }
    }

    /// Esc closes an open panel first; a second Esc leaves the session.
    fn close_or_cancel(&mut self) -> Option<SearchOutcome> {
        if self.panel.is_visible() || self.search.is_pending() {
            self.panel = PanelState::Idle;
            self.list_state.select(None);
            self.search.cancel_pending();
            return None;
        }
        Some(SearchOutcome::cancelled(self.input.text().to_string()))
    }

    /// Enter accepts the selected hit, or falls back to the site's full
    /// search page for the query itself.
    fn accept(&mut self) -> Option<SearchOutcome> {
        let query = self.input.text().to_string();

        if let Some(index) = self.selected_hit() {
            let hit = self.panel.hits()[index].clone();
            return Some(SearchOutcome::accepted(query, SearchSelection::Hit(hit)));
        }

        let trimmed = validate(&query, self.tuning.min_query_len)?;
        let url = search_page_url(trimmed);
        Some(SearchOutcome::accepted(
            query,
            SearchSelection::SearchPage { url },
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicU64;
    use std::sync::mpsc;

    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::search::SearchHit;
    use crate::ui::UiOptions;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app(initial_query: Option<&str>) -> App<'static> {
        let (command_tx, _commands) = mpsc::channel();
        let (_batches, batch_rx) = mpsc::channel();
        let options = UiOptions {
            initial_query: initial_query.map(str::to_string),
            ..UiOptions::default()
        };
        App::new(command_tx, batch_rx, Arc::new(AtomicU64::new(0)), options)
    }

    fn hit(label: &str, url: &str) -> SearchHit {
        SearchHit {
            label: label.to_string(),
            category: "Paper",
            url: url.to_string(),
        }
    }

    #[test]
    fn enter_accepts_the_selected_hit() {
        let mut app = app(Some("smith"));
        app.panel = PanelState::Populated(vec![
            hit("Smith et al.", "/resources/?id=7"),
            hit("Smith review", "/resources/?id=9"),
        ]);
        app.ensure_selection();
        app.move_selection(1);

        let outcome = app.handle_key(key(KeyCode::Enter)).expect("handle key");
        let outcome = outcome.expect("session ends");
        assert!(outcome.accepted);
        assert_eq!(
            outcome.selection.expect("selection").url(),
            "/resources/?id=9"
        );
    }

    #[test]
    fn enter_without_hits_redirects_to_the_search_page() {
        let mut app = app(Some("coral reefs"));

        let outcome = app
            .handle_key(key(KeyCode::Enter))
            .expect("handle key")
            .expect("session ends");
        assert_eq!(
            outcome.selection.expect("selection").url(),
            "/search/?q=coral+reefs"
        );
    }

    #[test]
    fn enter_with_a_short_query_does_nothing() {
        let mut app = app(Some("a"));
        let outcome = app.handle_key(key(KeyCode::Enter)).expect("handle key");
        assert!(outcome.is_none());
    }

    #[test]
    fn escape_closes_the_panel_before_ending_the_session() {
        let mut app = app(Some("smith"));
        app.panel = PanelState::Empty;

        let first = app.handle_key(key(KeyCode::Esc)).expect("handle key");
        assert!(first.is_none());
        assert_eq!(app.panel, PanelState::Idle);

        let second = app
            .handle_key(key(KeyCode::Esc))
            .expect("handle key")
            .expect("session ends");
        assert!(!second.accepted);
    }

    #[test]
    fn selection_wraps_around_the_hit_list() {
        let mut app = app(Some("smith"));
        app.panel = PanelState::Populated(vec![
            hit("one", "/resources/?id=1"),
            hit("two", "/resources/?id=2"),
        ]);
        app.ensure_selection();

        app.move_selection(-1);
        assert_eq!(app.selected_hit(), Some(1));
        app.move_selection(1);
        assert_eq!(app.selected_hit(), Some(0));
    }
}
