//! End-to-end fetch pipeline: search, fetch details, filter to report records.

use std::sync::Arc;

use crate::client::PubMedClient;
use crate::config::Config;
use crate::error::{ClientResult, PipelineResult};
use crate::filter::build_records;
use crate::models::{Paper, PaperRecord};

/// Where papers come from.
///
/// Implemented by [`PubMedClient`]; tests substitute canned sources.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Search and return paper identifiers.
    async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>>;

    /// Fetch full paper records for identifiers.
    async fn fetch(&self, ids: &[String]) -> ClientResult<Vec<Paper>>;
}

#[async_trait::async_trait]
impl PaperSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>> {
        self.search_papers(query, max_results).await
    }

    async fn fetch(&self, ids: &[String]) -> ClientResult<Vec<Paper>> {
        self.fetch_paper_details(ids).await
    }
}

/// Fetches papers and keeps those with pharma/biotech-affiliated authors.
#[derive(Clone)]
pub struct PubMedPharmaFetcher {
    /// Paper source.
    source: Arc<dyn PaperSource>,
}

impl PubMedPharmaFetcher {
    /// Create a fetcher over any paper source.
    #[must_use]
    pub fn new(source: Arc<dyn PaperSource>) -> Self {
        Self { source }
    }

    /// Create a fetcher backed by a PubMed client.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = PubMedClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Search, fetch and filter.
    ///
    /// An empty search or fetch result is not an error; it yields no records.
    pub async fn fetch_papers(
        &self,
        query: &str,
        max_results: usize,
    ) -> PipelineResult<Vec<PaperRecord>> {
        tracing::info!(query, "Starting search");

        let ids = self.source.search(query, max_results).await?;
        if ids.is_empty() {
            tracing::warn!(query, "No papers found for the given query");
            return Ok(Vec::new());
        }

        let papers = self.source.fetch(&ids).await?;
        if papers.is_empty() {
            tracing::warn!(requested = ids.len(), "No paper details could be fetched");
            return Ok(Vec::new());
        }

        let records = build_records(&papers);
        tracing::info!(
            records = records.len(),
            "Processed papers with pharma/biotech affiliations"
        );
        Ok(records)
    }
}

impl std::fmt::Debug for PubMedPharmaFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedPharmaFetcher").finish_non_exhaustive()
    }
}
