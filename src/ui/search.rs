//! Wiring between the UI state and the background search worker: the
//! debounce tick, edit handling, and application of settled batches.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use crate::search::{BatchOutcome, MergedResults, SearchBatch, validate};
use crate::ui::panel::PanelState;

use super::state::App;

impl App<'_> {
    /// Drain any settled batches waiting on the receiver channel.
    pub(crate) fn pump_batches(&mut self) {
        loop {
            match self.search.try_recv() {
                Ok(batch) => self.handle_batch(batch),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Fire the debounced dispatch once the quiet interval has elapsed.
    pub(crate) fn tick(&mut self, now: Instant) {
        if !self.search.take_due(now) {
            return;
        }
        if let Some(query) = validate(self.input.text(), self.tuning.min_query_len) {
            let query = query.to_string();
            self.panel = PanelState::Searching;
            self.search.issue_search(query);
        }
    }

    /// React to a change of the input text.
    pub(crate) fn on_edit(&mut self) {
        self.on_edit_at(Instant::now());
    }

    pub(crate) fn on_edit_at(&mut self, now: Instant) {
        let valid = validate(self.input.text(), self.tuning.min_query_len).is_some();
        if !valid {
            // Below the minimum: clear and hide immediately, no dispatch.
            self.panel = PanelState::Idle;
            self.list_state.select(None);
        }
        self.search.note_edit(valid, now);
    }

    /// Apply a settled batch if it still corresponds to the newest dispatch.
    fn handle_batch(&mut self, batch: SearchBatch) {
        if !self.search.matches_latest(batch.id) {
            // A slower, superseded cycle must not overwrite newer results.
            return;
        }
        self.search.record_batch_completion();

        self.panel = match batch.outcome {
            BatchOutcome::Failed => PanelState::Errored,
            BatchOutcome::Results(MergedResults::Empty) => PanelState::Empty,
            BatchOutcome::Results(MergedResults::Hits(hits)) => PanelState::Populated(hits),
        };
        self.list_state
            .select((self.panel.hit_count() > 0).then_some(0));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicU64;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    use super::*;
    use crate::search::{SearchCommand, SearchHit};
    use crate::ui::UiOptions;

    struct Harness {
        app: App<'static>,
        commands: Receiver<SearchCommand>,
        batches: Sender<SearchBatch>,
    }

    fn harness(initial_query: Option<&str>) -> Harness {
        let (command_tx, commands) = mpsc::channel();
        let (batches, batch_rx) = mpsc::channel();
        let options = UiOptions {
            initial_query: initial_query.map(str::to_string),
            ..UiOptions::default()
        };
        let app = App::new(command_tx, batch_rx, Arc::new(AtomicU64::new(0)), options);
        Harness {
            app,
            commands,
            batches,
        }
    }

    fn type_text(harness: &mut Harness, text: &str, mut now: Instant) -> Instant {
        for ch in text.chars() {
            harness.app.input.push_char(ch);
            harness.app.on_edit_at(now);
            now += Duration::from_millis(50);
        }
        now - Duration::from_millis(50)
    }

    fn sent_queries(harness: &Harness) -> Vec<(u64, String)> {
        harness
            .commands
            .try_iter()
            .filter_map(|command| match command {
                SearchCommand::Query { id, query } => Some((id, query)),
                SearchCommand::Shutdown => None,
            })
            .collect()
    }

    fn hit(label: &str) -> SearchHit {
        SearchHit {
            label: label.to_string(),
            category: "Paper",
            url: "/resources/?id=1".to_string(),
        }
    }

    #[test]
    fn short_queries_never_dispatch_and_clear_the_panel() {
        let mut harness = harness(None);
        let now = Instant::now();

        harness.app.panel = PanelState::Empty;
        harness.app.input.push_char('a');
        harness.app.on_edit_at(now);
        harness.app.tick(now + Duration::from_secs(5));

        assert_eq!(harness.app.panel, PanelState::Idle);
        assert!(sent_queries(&harness).is_empty());
    }

    #[test]
    fn rapid_typing_dispatches_exactly_once_after_the_quiet_interval() {
        let mut harness = harness(None);
        let last_edit = type_text(&mut harness, "smith", Instant::now());

        // Still inside the window: nothing dispatched.
        harness.app.tick(last_edit + Duration::from_millis(299));
        assert!(sent_queries(&harness).is_empty());

        harness.app.tick(last_edit + Duration::from_millis(300));
        harness.app.tick(last_edit + Duration::from_millis(500));

        let queries = sent_queries(&harness);
        assert_eq!(queries, vec![(1, "smith".to_string())]);
        assert_eq!(harness.app.panel, PanelState::Searching);
    }

    #[test]
    fn shrinking_below_the_minimum_while_pending_cancels_the_dispatch() {
        let mut harness = harness(Some("ab"));
        let now = Instant::now();

        harness.app.input.pop_char();
        harness.app.on_edit_at(now);
        harness.app.tick(now + Duration::from_secs(5));

        assert_eq!(harness.app.panel, PanelState::Idle);
        assert!(sent_queries(&harness).is_empty());
    }

    #[test]
    fn settled_batches_update_the_panel_and_selection() {
        let mut harness = harness(None);
        let last_edit = type_text(&mut harness, "smith", Instant::now());
        harness.app.tick(last_edit + Duration::from_millis(300));

        harness
            .batches
            .send(SearchBatch {
                id: 1,
                query: "smith".to_string(),
                outcome: BatchOutcome::Results(MergedResults::Hits(vec![hit("Smith et al.")])),
            })
            .expect("send batch");
        harness.app.pump_batches();

        assert_eq!(
            harness.app.panel,
            PanelState::Populated(vec![hit("Smith et al.")])
        );
        assert_eq!(harness.app.list_state.selected(), Some(0));
    }

    #[test]
    fn stale_generations_are_dropped_without_touching_the_panel() {
        let mut harness = harness(None);
        let mut last_edit = type_text(&mut harness, "ab", Instant::now());
        harness.app.tick(last_edit + Duration::from_millis(300));

        // The user keeps typing; a second generation goes out.
        last_edit = type_text(&mut harness, "c", last_edit + Duration::from_millis(400));
        harness.app.tick(last_edit + Duration::from_millis(300));
        assert_eq!(sent_queries(&harness).len(), 2);

        // The slower first cycle settles afterwards.
        harness
            .batches
            .send(SearchBatch {
                id: 1,
                query: "ab".to_string(),
                outcome: BatchOutcome::Results(MergedResults::Hits(vec![hit("stale")])),
            })
            .expect("send stale batch");
        harness.app.pump_batches();
        assert_eq!(harness.app.panel, PanelState::Searching);
        assert!(harness.app.search.is_in_flight());

        harness
            .batches
            .send(SearchBatch {
                id: 2,
                query: "abc".to_string(),
                outcome: BatchOutcome::Results(MergedResults::Empty),
            })
            .expect("send current batch");
        harness.app.pump_batches();
        assert_eq!(harness.app.panel, PanelState::Empty);
        assert!(!harness.app.search.is_in_flight());
    }

    #[test]
    fn failed_batches_show_the_error_sentinel() {
        let mut harness = harness(None);
        let last_edit = type_text(&mut harness, "smith", Instant::now());
        harness.app.tick(last_edit + Duration::from_millis(300));

        harness
            .batches
            .send(SearchBatch {
                id: 1,
                query: "smith".to_string(),
                outcome: BatchOutcome::Failed,
            })
            .expect("send batch");
        harness.app.pump_batches();

        assert_eq!(harness.app.panel, PanelState::Errored);
    }
}
