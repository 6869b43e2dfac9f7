//! The live search aggregator.
//!
//! A validated query fans out into one capped, case-insensitive substring
//! request per content category, issued concurrently and joined as a batch.
//! Each category's rows are labeled with their source and a navigation URL,
//! then concatenated in the fixed category order. A background worker owns
//! the async runtime; the UI talks to it over channels and discards batches
//! from superseded query generations.

pub mod category;
pub mod dispatch;
pub mod merge;
pub mod oneshot;
pub mod query;
pub mod source;
pub mod worker;

mod commands;

pub use category::{CategorySpec, LinkTemplate, categories, search_page_url};
pub use commands::{BatchOutcome, SearchBatch, SearchCommand};
pub use dispatch::{CategoryOutcome, dispatch};
pub use merge::{MergedResults, SearchHit, merge};
pub use oneshot::{PaperResult, run_paper_search};
pub use query::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN, DEFAULT_PER_CATEGORY_LIMIT, SearchTuning, validate,
};
pub use source::{CategorySource, RemoteCategorySource, remote_sources};
pub use worker::spawn;
