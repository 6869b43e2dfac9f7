//! The seam between the aggregator and the hosted service.
//!
//! The dispatcher only sees [`CategorySource`], so tests can stand in
//! deterministic (or deliberately slow, or failing) sources without any HTTP
//! machinery.

use async_trait::async_trait;

use crate::remote::{Client, RemoteError, Row};

use super::category::CategorySpec;

/// One queryable content category.
#[async_trait]
pub trait CategorySource: Send + Sync {
    fn spec(&self) -> &CategorySpec;

    /// Case-insensitive substring search over the category's match column.
    /// `limit` of `None` means the service's default (uncapped) row count.
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<Row>, RemoteError>;
}

/// A category backed by a table of the hosted API.
pub struct RemoteCategorySource {
    client: Client,
    spec: &'static CategorySpec,
}

impl RemoteCategorySource {
    pub fn new(client: Client, spec: &'static CategorySpec) -> Self {
        Self { client, spec }
    }
}

#[async_trait]
impl CategorySource for RemoteCategorySource {
    fn spec(&self) -> &CategorySpec {
        self.spec
    }

    async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<Row>, RemoteError> {
        let mut request = self
            .client
            .from(self.spec.table)
            .select(self.spec.columns)
            .ilike(self.spec.match_column, query);
        if let Some(limit) = limit {
            request = request.limit(limit);
        }
        request.fetch().await
    }
}

/// Build one remote source per configured category, in presentation order.
pub fn remote_sources(client: &Client) -> Vec<Box<dyn CategorySource>> {
    super::categories()
        .iter()
        .map(|spec| Box::new(RemoteCategorySource::new(client.clone(), spec)) as Box<dyn CategorySource>)
        .collect()
}
