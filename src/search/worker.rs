//! Background search worker.
//!
//! The worker thread owns a current-thread tokio runtime and drives one
//! fan-out per queued query. Communication with the UI runs over plain
//! channels; an atomic holds the latest issued query generation so the worker
//! can skip queries that were superseded while still queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use super::commands::{BatchOutcome, SearchBatch, SearchCommand};
use super::dispatch::dispatch;
use super::merge::merge;
use super::source::CategorySource;

/// Launch the worker thread and return its communication channels.
pub fn spawn(
    sources: Vec<Box<dyn CategorySource>>,
    limit: Option<u32>,
) -> Result<(Sender<SearchCommand>, Receiver<SearchBatch>, Arc<AtomicU64>)> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build search runtime")?;

    let (command_tx, command_rx) = mpsc::channel();
    let (batch_tx, batch_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || {
        worker_loop(
            &runtime,
            &sources,
            limit,
            &command_rx,
            &batch_tx,
            &thread_latest,
        );
    });

    Ok((command_tx, batch_rx, latest_query_id))
}

fn worker_loop(
    runtime: &Runtime,
    sources: &[Box<dyn CategorySource>],
    limit: Option<u32>,
    command_rx: &Receiver<SearchCommand>,
    batch_tx: &Sender<SearchBatch>,
    latest_query_id: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(runtime, sources, limit, batch_tx, latest_query_id, command) {
            break;
        }
    }
}

fn handle_command(
    runtime: &Runtime,
    sources: &[Box<dyn CategorySource>],
    limit: Option<u32>,
    batch_tx: &Sender<SearchBatch>,
    latest_query_id: &AtomicU64,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Query { id, query } => {
            // A later generation may already be queued behind this one;
            // running a known-stale fan-out only wastes requests.
            if id < latest_query_id.load(Ordering::Acquire) {
                return true;
            }

            let outcomes = runtime.block_on(dispatch(sources, &query, limit));
            let outcome = if !outcomes.is_empty() && outcomes.iter().all(|o| o.rows.is_err()) {
                BatchOutcome::Failed
            } else {
                BatchOutcome::Results(merge(&outcomes))
            };

            batch_tx.send(SearchBatch { id, query, outcome }).is_ok()
        }
        SearchCommand::Shutdown => false,
    }
}
