//! Record filter: collapses per-author classifications into one record per paper.
//!
//! Papers with no non-academic author produce no record. A malformed paper
//! is logged and skipped without affecting the rest of the batch.

use std::collections::BTreeSet;

use crate::affiliation::{
    DEFAULT_MIN_CONFIDENCE, classify, extract_company_names, identify_companies,
};
use crate::error::FilterError;
use crate::models::{JOIN_SEPARATOR, Paper, PaperRecord};

/// Build report records for papers with at least one non-academic author.
///
/// Output order follows input order.
#[must_use]
pub fn build_records(papers: &[Paper]) -> Vec<PaperRecord> {
    let records: Vec<PaperRecord> = papers
        .iter()
        .filter_map(|paper| match build_record(paper) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(
                    pubmed_id = %paper.pubmed_id,
                    error = %e,
                    "Skipping malformed paper"
                );
                None
            }
        })
        .collect();

    if records.is_empty() {
        tracing::warn!(total = papers.len(), "No papers with non-academic authors");
    } else {
        tracing::info!(
            kept = records.len(),
            total = papers.len(),
            "Filtered papers with non-academic authors"
        );
    }

    records
}

/// Build the record for a single paper.
///
/// Returns `Ok(None)` when every author is academic.
pub fn build_record(paper: &Paper) -> Result<Option<PaperRecord>, FilterError> {
    paper.validate()?;

    let mut non_academic_authors: Vec<&str> = Vec::new();
    let mut companies: BTreeSet<String> = BTreeSet::new();
    let mut corresponding_email = "";

    for author in &paper.authors {
        let classification = classify(&author.affiliation);
        tracing::debug!(
            pubmed_id = %paper.pubmed_id,
            author = %author.name,
            rule = ?classification.map(|c| c.rule),
            "Classified author affiliation"
        );

        if classification.is_some_and(|c| c.non_academic) {
            non_academic_authors.push(author.name.as_str());

            let matches = identify_companies(&author.affiliation);
            for m in &matches {
                tracing::debug!(
                    pubmed_id = %paper.pubmed_id,
                    company = %m.company_name,
                    confidence = m.confidence,
                    match_type = %m.match_type,
                    "Matched company"
                );
            }
            companies.extend(extract_company_names(&matches, DEFAULT_MIN_CONFIDENCE));
        }

        if let Some(email) = author.email() {
            // A corresponding author always wins; otherwise the first email found is kept.
            if author.is_corresponding || corresponding_email.is_empty() {
                corresponding_email = email;
            }
        }
    }

    if non_academic_authors.is_empty() {
        return Ok(None);
    }

    Ok(Some(PaperRecord {
        pubmed_id: paper.pubmed_id.clone(),
        title: paper.title.clone(),
        publication_date: paper.publication_date.clone(),
        non_academic_authors: non_academic_authors.join(JOIN_SEPARATOR),
        company_affiliations: companies.into_iter().collect::<Vec<_>>().join(JOIN_SEPARATOR),
        corresponding_author_email: corresponding_email.to_string(),
    }))
}
