//! Session-side bookkeeping for the background search worker.
//!
//! Owns the debounce deadline and the query generation counter. Every edit
//! re-arms (or cancels) the single pending deadline; every dispatch bumps the
//! generation, and batches are only applied when their generation is still
//! the latest. A superseded batch is dropped before it can touch the panel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::search::{SearchBatch, SearchCommand};

pub(crate) struct SearchRuntime {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchBatch>,
    latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    current_query_id: Option<u64>,
    in_flight: bool,
    debounce: Duration,
    deadline: Option<Instant>,
}

impl SearchRuntime {
    pub(crate) fn new(
        tx: Sender<SearchCommand>,
        rx: Receiver<SearchBatch>,
        latest_query_id: Arc<AtomicU64>,
        debounce: Duration,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_query_id,
            next_query_id: 0,
            current_query_id: None,
            in_flight: false,
            debounce,
            deadline: None,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }

    /// Record an edit at `now`. A valid (long enough) query re-arms the
    /// single debounce deadline; an invalid one cancels it outright.
    pub(crate) fn note_edit(&mut self, valid: bool, now: Instant) {
        self.deadline = valid.then(|| now + self.debounce);
    }

    /// Cancel the pending deadline without waiting for it to fire.
    pub(crate) fn cancel_pending(&mut self) {
        self.deadline = None;
    }

    /// Whether an armed deadline has elapsed; consumes it when it has.
    pub(crate) fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Dispatch `query` under a fresh generation.
    pub(crate) fn issue_search(&mut self, query: String) {
        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.current_query_id = Some(id);
        self.in_flight = true;
        self.latest_query_id.store(id, AtomicOrdering::Release);
        let _ = self.tx.send(SearchCommand::Query { id, query });
    }

    /// Whether a settled batch belongs to the most recent dispatch.
    pub(crate) fn matches_latest(&self, batch_id: u64) -> bool {
        Some(batch_id) == self.current_query_id
    }

    pub(crate) fn record_batch_completion(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<SearchBatch, TryRecvError> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn runtime() -> (SearchRuntime, Receiver<SearchCommand>) {
        let (tx, command_rx) = mpsc::channel();
        let (_batch_tx, rx) = mpsc::channel::<SearchBatch>();
        let runtime = SearchRuntime::new(
            tx,
            rx,
            Arc::new(AtomicU64::new(0)),
            Duration::from_millis(300),
        );
        (runtime, command_rx)
    }

    #[test]
    fn rapid_edits_collapse_into_one_due_deadline() {
        let (mut runtime, _commands) = runtime();
        let start = Instant::now();

        // Five keystrokes inside the window: each re-arms the single timer.
        for i in 0..5u64 {
            runtime.note_edit(true, start + Duration::from_millis(i * 50));
        }

        let last_edit = start + Duration::from_millis(200);
        assert!(!runtime.take_due(last_edit + Duration::from_millis(299)));
        assert!(runtime.take_due(last_edit + Duration::from_millis(300)));
        // Consumed: it cannot fire twice.
        assert!(!runtime.take_due(last_edit + Duration::from_millis(400)));
    }

    #[test]
    fn shrinking_below_the_minimum_cancels_the_pending_deadline() {
        let (mut runtime, _commands) = runtime();
        let start = Instant::now();

        runtime.note_edit(true, start);
        assert!(runtime.is_pending());

        // "ab" -> "a": the edit is invalid, so nothing may fire later.
        runtime.note_edit(false, start + Duration::from_millis(100));
        assert!(!runtime.is_pending());
        assert!(!runtime.take_due(start + Duration::from_secs(10)));
    }

    #[test]
    fn each_dispatch_gets_a_fresh_generation() {
        let (mut runtime, commands) = runtime();

        runtime.issue_search("ab".to_string());
        runtime.issue_search("abc".to_string());

        let ids: Vec<u64> = commands
            .try_iter()
            .map(|command| match command {
                SearchCommand::Query { id, .. } => id,
                SearchCommand::Shutdown => panic!("unexpected shutdown"),
            })
            .collect();
        assert_eq!(ids, vec![1, 2]);

        // Only the newest generation is applied.
        assert!(!runtime.matches_latest(1));
        assert!(runtime.matches_latest(2));
    }

    #[test]
    fn completion_clears_the_in_flight_marker() {
        let (mut runtime, _commands) = runtime();

        runtime.issue_search("ab".to_string());
        assert!(runtime.is_in_flight());
        runtime.record_batch_completion();
        assert!(!runtime.is_in_flight());
    }
}
