//! Configuration for the PubMed pharma papers fetcher.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for NCBI E-utilities.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Request timeout (efetch of a full batch can be slow).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Number of PubMed IDs per efetch request.
    pub const BATCH_SIZE: usize = 20;

    /// Pause between efetch batches.
    pub const BATCH_DELAY: Duration = Duration::from_millis(500);

    /// Default number of search results.
    pub const DEFAULT_MAX_RESULTS: usize = 100;

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email sent to NCBI (recommended by their usage policy).
    pub email: Option<String>,

    /// NCBI API key (optional, raises rate limits).
    pub api_key: Option<String>,

    /// Base URL for E-utilities (for testing with mock servers).
    pub eutils_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// PubMed IDs per efetch request.
    pub batch_size: usize,

    /// Delay between efetch batches.
    pub batch_delay: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a new configuration with optional contact email and API key.
    #[must_use]
    pub fn new(email: Option<String>, api_key: Option<String>) -> Self {
        Self {
            email,
            api_key,
            eutils_url: api::EUTILS_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            batch_size: api::BATCH_SIZE,
            batch_delay: api::BATCH_DELAY,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            email: None,
            api_key: None,
            eutils_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            batch_size: api::BATCH_SIZE,
            batch_delay: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),     // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists, then reads `PUBMED_EMAIL`
    /// and `NCBI_API_KEY`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let email = std::env::var("PUBMED_EMAIL").ok().filter(|v| !v.is_empty());
        let api_key = std::env::var("NCBI_API_KEY").ok().filter(|v| !v.is_empty());
        Ok(Self::new(email, api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Identification parameters appended to every E-utilities request.
    #[must_use]
    pub fn identity_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        params
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
