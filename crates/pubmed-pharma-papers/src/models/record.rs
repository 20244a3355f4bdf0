//! Output record for papers with non-academic authors.

use serde::{Deserialize, Serialize};

/// Column headers for tabular output, in field order.
pub const HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Separator used when joining author and company names for display.
pub const JOIN_SEPARATOR: &str = "; ";

/// One report row.
///
/// Exists only for papers with at least one non-academic author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed ID.
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Article title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication date (YYYY-MM-DD).
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Non-academic author names in byline order, `"; "`-joined.
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Sorted company names, `"; "`-joined.
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    /// Corresponding author email, empty if none was found.
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// Fields in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }
}
