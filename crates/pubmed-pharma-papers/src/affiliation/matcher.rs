//! Company name extraction from affiliation text.
//!
//! Two passes: an exact pass over the known-company list, and a keyword
//! pass ("<words> Therapeutics" and friends) that only runs when the exact
//! pass found nothing. Results are deduplicated case-insensitively, keeping
//! the most confident match, and sorted by confidence descending.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::classifier::has_academic_signal;
use super::keywords::{COMPANY_SUFFIXES, KNOWN_COMPANIES};
use crate::models::{CompanyMatch, MatchType};

/// Default threshold for [`extract_company_names`].
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Confidence bounds for every produced match.
pub const MIN_CONFIDENCE: f64 = 0.1;
/// Upper confidence bound.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Fixed confidence of keyword-pass matches.
pub const KEYWORD_CONFIDENCE: f64 = 0.6;

const EXACT_BASE: f64 = 0.8;
const LONG_NAME_BONUS: f64 = 0.1;
const LEADING_BONUS: f64 = 0.1;
const ACADEMIC_PENALTY: f64 = 0.2;
const LONG_NAME_CHARS: usize = 10;

static COMPANY_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(\w+(?:\s+\w+)*)\s+({})", COMPANY_SUFFIXES.join("|"));
    Regex::new(&pattern).expect("valid company phrase regex")
});

/// Identify companies named in an affiliation, most confident first.
#[must_use]
pub fn identify_companies(affiliation: &str) -> Vec<CompanyMatch> {
    if affiliation.is_empty() {
        return Vec::new();
    }

    let lower = affiliation.to_lowercase();

    let mut matches = exact_matches(&lower);
    if matches.is_empty() {
        matches = keyword_matches(&lower);
    }

    let mut unique = dedup_best(matches);
    unique.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    unique
}

/// Names of matches at or above `min_confidence`, in match order.
#[must_use]
pub fn extract_company_names(matches: &[CompanyMatch], min_confidence: f64) -> Vec<String> {
    matches
        .iter()
        .filter(|m| m.confidence >= min_confidence)
        .map(|m| m.company_name.clone())
        .collect()
}

/// Confidence for a known company found in an already-lowercased affiliation.
#[must_use]
pub fn calculate_confidence(lower: &str, company: &str) -> f64 {
    let mut confidence = EXACT_BASE;

    if company.chars().count() > LONG_NAME_CHARS {
        confidence += LONG_NAME_BONUS;
    }

    if lower.starts_with(company) {
        confidence += LEADING_BONUS;
    }

    if has_academic_signal(lower) {
        confidence -= ACADEMIC_PENALTY;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Capitalize the first cased character of every alphabetic run.
///
/// `"johnson & johnson"` becomes `"Johnson & Johnson"`, `"j&j"` becomes `"J&J"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }

    out
}

fn exact_matches(lower: &str) -> Vec<CompanyMatch> {
    KNOWN_COMPANIES
        .iter()
        .filter(|company| lower.contains(**company))
        .map(|company| {
            CompanyMatch::new(
                title_case(company),
                calculate_confidence(lower, company),
                MatchType::Exact,
            )
        })
        .collect()
}

fn keyword_matches(lower: &str) -> Vec<CompanyMatch> {
    COMPANY_PHRASE_RE
        .find_iter(lower)
        .map(|m| CompanyMatch::new(title_case(m.as_str()), KEYWORD_CONFIDENCE, MatchType::Keyword))
        .collect()
}

/// Keep the most confident match per case-insensitive name.
fn dedup_best(matches: Vec<CompanyMatch>) -> Vec<CompanyMatch> {
    matches
        .into_iter()
        .fold(BTreeMap::<String, CompanyMatch>::new(), |mut best, m| {
            let key = m.key();
            let keep_existing =
                best.get(&key).is_some_and(|existing| existing.confidence >= m.confidence);
            if !keep_existing {
                best.insert(key, m);
            }
            best
        })
        .into_values()
        .collect()
}
