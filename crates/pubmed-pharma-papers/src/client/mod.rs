//! PubMed E-utilities client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Batched efetch with a polite delay between batches
//! - Response caching with 5-minute TTL

pub mod xml;

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::Paper;

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response body cache.
    cache: Cache<String, String>,

    /// Settings (base URL, identity, batching).
    config: Config,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self { client, cache, config })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }

    /// Search PubMed and return matching PubMed IDs.
    ///
    /// Accepts full PubMed query syntax (boolean operators, field tags, date ranges).
    pub async fn search_papers(
        &self,
        query: &str,
        max_results: usize,
    ) -> ClientResult<Vec<String>> {
        tracing::info!(query, max_results, "Searching PubMed");

        let url = format!("{}/esearch.fcgi", self.config.eutils_url);
        let params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), max_results.to_string()),
            ("retmode".to_string(), "xml".to_string()),
        ];

        let body = self.get(&url, params).await?;
        let ids = xml::parse_search_ids(&body)?;

        tracing::info!(count = ids.len(), "Found papers");
        Ok(ids)
    }

    /// Fetch full records for the given PubMed IDs.
    ///
    /// IDs are requested in batches; a batch that fails is logged and skipped
    /// so the remaining batches still contribute papers.
    pub async fn fetch_paper_details(&self, pubmed_ids: &[String]) -> ClientResult<Vec<Paper>> {
        if pubmed_ids.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(count = pubmed_ids.len(), "Fetching paper details");

        let batch_size = self.config.batch_size.max(1);
        let batch_count = pubmed_ids.len().div_ceil(batch_size);
        let mut papers = Vec::with_capacity(pubmed_ids.len());

        for (index, batch) in pubmed_ids.chunks(batch_size).enumerate() {
            match self.fetch_batch(batch).await {
                Ok(batch_papers) => papers.extend(batch_papers),
                Err(e) => {
                    tracing::warn!(
                        batch = index + 1,
                        of = batch_count,
                        error = %e,
                        "Skipping failed batch"
                    );
                }
            }

            if index + 1 < batch_count && !self.config.batch_delay.is_zero() {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        Ok(papers)
    }

    /// Fetch and parse one efetch batch.
    pub async fn fetch_batch(&self, pubmed_ids: &[String]) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/efetch.fcgi", self.config.eutils_url);
        let params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("id".to_string(), pubmed_ids.join(",")),
            ("retmode".to_string(), "xml".to_string()),
        ];

        let body = self.get(&url, params).await?;
        xml::parse_articles(&body)
    }

    /// Make a GET request and return the response body.
    async fn get(&self, url: &str, mut params: Vec<(String, String)>) -> ClientResult<String> {
        params.extend(self.config.identity_params());

        // Check cache
        let cache_key = Self::cache_key("GET", url, &params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let response = self.client.get(url).query(&params).send().await?;

        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        self.cache.insert(cache_key, body.clone()).await;

        Ok(body)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("eutils_url", &self.config.eutils_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
