//! Company match value objects.

use serde::{Deserialize, Serialize};

/// How a company name was found in an affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Name from the known-company list found verbatim.
    Exact,
    /// Name inferred from a "<words> Pharmaceuticals/Therapeutics/..." phrase.
    Keyword,
}

impl MatchType {
    /// Lowercase label used in logs and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Keyword => "keyword",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A company identified in an affiliation string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMatch {
    /// Title-cased company name.
    pub company_name: String,

    /// Heuristic match strength in `[0.1, 1.0]`; not a probability.
    pub confidence: f64,

    /// Which pass produced the match.
    pub match_type: MatchType,
}

impl CompanyMatch {
    /// Create a new match.
    #[must_use]
    pub fn new(company_name: impl Into<String>, confidence: f64, match_type: MatchType) -> Self {
        Self { company_name: company_name.into(), confidence, match_type }
    }

    /// Case-insensitive key used for deduplication.
    #[must_use]
    pub fn key(&self) -> String {
        self.company_name.to_lowercase()
    }
}
