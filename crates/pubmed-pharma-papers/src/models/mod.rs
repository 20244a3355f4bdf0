//! Data models for PubMed papers, company matches and report records.
//!
//! Papers and authors flow in from the PubMed client, records flow out to
//! the report formatters.

mod company;
mod paper;
mod record;

pub use company::{CompanyMatch, MatchType};
pub use paper::{Author, Paper, extract_email};
pub use record::{HEADERS, JOIN_SEPARATOR, PaperRecord};
