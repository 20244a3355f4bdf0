//! Error types for the PubMed pharma papers pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! The affiliation classifier and company matcher are total functions and have
//! no error type of their own.

use std::time::Duration;

/// Errors from the PubMed E-utilities client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by NCBI (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The E-utilities response was not well-formed XML.
    #[error("Failed to parse XML response: {0}")]
    Xml(String),
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create an XML parse error.
    #[must_use]
    pub fn xml(message: impl std::fmt::Display) -> Self {
        Self::Xml(message.to_string())
    }
}

/// Errors raised while writing a report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Filesystem or stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single paper that cannot be turned into a record.
///
/// Never escapes the record filter: it is logged and the paper is dropped.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// Paper data is missing a required field.
    #[error("Malformed paper {pubmed_id:?}: {reason}")]
    MalformedPaper {
        /// PubMed ID as supplied (possibly empty)
        pubmed_id: String,
        /// What is wrong with it
        reason: String,
    },
}

impl FilterError {
    /// Create a malformed-paper error.
    #[must_use]
    pub fn malformed(pubmed_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPaper { pubmed_id: pubmed_id.into(), reason: reason.into() }
    }
}

/// Errors from the end-to-end fetch pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Error from the PubMed client
    #[error("PubMed error: {0}")]
    Client(#[from] ClientError),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message_includes_wait() {
        let err = ClientError::rate_limited(60);
        assert!(matches!(
            err,
            ClientError::RateLimited { retry_after } if retry_after == Duration::from_secs(60)
        ));
        assert!(err.to_string().contains("60s"));
    }

    #[test]
    fn test_filter_error_message_names_paper() {
        let err = FilterError::malformed("12345", "author 2 has no name");
        let message = err.to_string();
        assert!(message.contains("12345"));
        assert!(message.contains("author 2 has no name"));
    }

    #[test]
    fn test_pipeline_error_wraps_client_error() {
        let err: PipelineError = ClientError::bad_request("bad term").into();
        assert!(err.to_string().starts_with("PubMed error"));
    }
}
