//! Core crate exports for building and running the `sitesearch` terminal
//! interface.
//!
//! The root module primarily re-exports types from the remote, search, and UI
//! subsystems so that embedders can drive a live search session without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod remote;
pub mod search;
pub mod ui;

pub use remote::{Client, RemoteConfig, RemoteError};
pub use search::{CategorySpec, SearchHit, SearchTuning, categories};
pub use ui::{SearchOutcome, SearchSelection, UiOptions, run};
