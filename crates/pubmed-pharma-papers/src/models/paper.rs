//! Paper and author models as parsed from PubMed records.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// First e-mail-shaped token in free text.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// A paper author with raw affiliation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name ("ForeName LastName").
    pub name: String,

    /// Raw affiliation text, possibly empty.
    #[serde(default)]
    pub affiliation: String,

    /// Email address found in the affiliation, if any.
    #[serde(default)]
    pub email: Option<String>,

    /// Whether the affiliation marks this author as corresponding.
    #[serde(default)]
    pub is_corresponding: bool,
}

impl Author {
    /// Build an author, deriving email and corresponding flag from the affiliation.
    ///
    /// The corresponding flag is a plain case-insensitive substring test for
    /// "corresponding"; the email is the first address-shaped token.
    #[must_use]
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        let affiliation = affiliation.into();
        let email = extract_email(&affiliation);
        let is_corresponding = affiliation.to_lowercase().contains("corresponding");
        Self { name: name.into(), affiliation, email, is_corresponding }
    }

    /// Email address, treating an empty string as absent.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

/// A research paper fetched from PubMed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed ID.
    pub pubmed_id: String,

    /// Article title.
    pub title: String,

    /// Publication date in ISO format (YYYY-MM-DD).
    pub publication_date: String,

    /// Authors in byline order.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Abstract text (not used for classification).
    #[serde(default)]
    pub r#abstract: String,
}

impl Paper {
    /// Check that the paper carries the fields the record filter relies on.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.pubmed_id.trim().is_empty() {
            return Err(FilterError::malformed(&self.pubmed_id, "missing PubMed ID"));
        }

        if let Some(position) = self.authors.iter().position(|a| a.name.trim().is_empty()) {
            return Err(FilterError::malformed(
                &self.pubmed_id,
                format!("author {} has no name", position + 1),
            ));
        }

        Ok(())
    }
}

/// Extract the first email address from free text.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_new_extracts_email() {
        let author = Author::new(
            "Jane Doe",
            "Pfizer Inc., New York, NY, USA. jane.doe@pfizer.com.",
        );
        assert_eq!(author.email(), Some("jane.doe@pfizer.com"));
        assert!(!author.is_corresponding);
    }

    #[test]
    fn test_author_new_detects_corresponding_marker() {
        let author = Author::new("A B", "CORRESPONDING author: Acme Labs, a@acme.io");
        assert!(author.is_corresponding);
        assert_eq!(author.email(), Some("a@acme.io"));
    }

    #[test]
    fn test_author_without_email() {
        let author = Author::new("A B", "Genentech, South San Francisco, CA");
        assert!(author.email.is_none());
    }

    #[test]
    fn test_empty_email_treated_as_absent() {
        let author = Author { email: Some(String::new()), ..Author::new("A B", "") };
        assert_eq!(author.email(), None);
    }

    #[test]
    fn test_validate_rejects_missing_id() {
        let paper = Paper { title: "T".into(), ..Default::default() };
        assert!(paper.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nameless_author() {
        let paper = Paper {
            pubmed_id: "1".into(),
            authors: vec![Author::new("Ok Name", "x"), Author::new("  ", "y")],
            ..Default::default()
        };
        assert_eq!(paper.validate(), Err(FilterError::malformed("1", "author 2 has no name")));
    }
}
