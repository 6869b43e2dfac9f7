//! Client for the hosted tabular content API.
//!
//! The site's data lives behind a PostgREST-style HTTP endpoint. This module
//! wraps the handful of query shapes the application needs (filtered selects,
//! single-row fetches, inserts) behind a small builder mirroring the hosted
//! SDK's surface, plus typed helpers for the two non-search operations the
//! site performs: the active promotional banner and newsletter signups.

mod banner;
mod client;
mod error;
mod newsletter;

pub use banner::{Banner, fetch_active_banner};
pub use client::{Client, RemoteConfig, Row, TableQuery};
pub use error::RemoteError;
pub use newsletter::{SubscribeError, SubscribeOutcome, normalize_email, subscribe};
