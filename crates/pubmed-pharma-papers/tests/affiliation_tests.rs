//! Affiliation classifier and company matcher tests.
//!
//! Exercises the public API the record filter is built on.

use pubmed_pharma_papers::affiliation::{
    DEFAULT_MIN_CONFIDENCE, RULES, Rule, classify, extract_company_names, identify_companies,
    is_non_academic,
};
use pubmed_pharma_papers::models::MatchType;

// =============================================================================
// Classifier
// =============================================================================

#[test]
fn test_university_affiliation_is_academic() {
    assert!(!is_non_academic("Department of Biology, Harvard University, Cambridge, MA"));
}

#[test]
fn test_pharma_affiliation_is_non_academic() {
    assert!(is_non_academic("Pfizer Inc., New York, NY, USA"));
}

#[test]
fn test_academic_keyword_vetoes_company_name() {
    // Both an academic keyword and a known company are present.
    let affiliation = "Novartis Institute for Biomedical Research, Cambridge";
    let c = classify(affiliation).unwrap();
    assert_eq!(c.rule, Rule::AcademicVeto);
    assert_eq!(c.term, "institute");
    assert!(!is_non_academic(affiliation));
}

#[test]
fn test_empty_affiliation_is_academic() {
    assert!(!is_non_academic(""));
}

#[test]
fn test_company_suffix_counts_as_industry() {
    let c = classify("Zeta Labs Ltd., Oxford, UK").unwrap();
    assert_eq!(c.rule, Rule::IndustryKeyword);
}

#[test]
fn test_known_company_without_industry_keyword() {
    let c = classify("Moderna, Cambridge, MA").unwrap();
    assert_eq!(c.rule, Rule::KnownCompany);
    assert_eq!(c.term, "moderna");
}

#[test]
fn test_email_domain_decides_when_nothing_else_fires() {
    assert!(is_non_academic("Basel, Switzerland. contact@zeta-analytics.ch"));
    assert!(!is_non_academic("Palo Alto, CA. someone@stanford.edu"));
}

#[test]
fn test_rules_evaluated_in_priority_order() {
    assert_eq!(
        RULES,
        [Rule::AcademicVeto, Rule::IndustryKeyword, Rule::KnownCompany, Rule::CorporateEmail]
    );
}

#[test]
fn test_classification_serializes_rule_name() {
    let c = classify("Amgen Inc., Thousand Oaks, CA").unwrap();
    let json = serde_json::to_value(c).unwrap();
    assert_eq!(json["rule"], "industry_keyword");
    assert_eq!(json["non_academic"], true);
}

// =============================================================================
// Company matcher
// =============================================================================

#[test]
fn test_identifies_known_company() {
    let matches = identify_companies("Pfizer Inc., New York, NY, USA");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].company_name, "Pfizer");
    assert_eq!(matches[0].match_type, MatchType::Exact);
    assert!((matches[0].confidence - 0.9).abs() < 1e-9);
}

#[test]
fn test_multiword_company_title_cased() {
    let names: Vec<String> = identify_companies("Boehringer Ingelheim Pharma GmbH, Germany")
        .into_iter()
        .map(|m| m.company_name)
        .collect();
    assert!(names.contains(&"Boehringer Ingelheim".to_string()));
}

#[test]
fn test_keyword_pass_skipped_when_known_company_found() {
    let matches = identify_companies("Novartis Pharmaceuticals, East Hanover, NJ");
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|m| m.match_type == MatchType::Exact));
    assert!(!matches.iter().any(|m| m.company_name == "Novartis Pharmaceuticals"));
}

#[test]
fn test_keyword_pass_used_when_no_known_company() {
    let matches = identify_companies("Acme Biosciences, Durham, NC");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].company_name, "Acme Biosciences");
    assert_eq!(matches[0].match_type, MatchType::Keyword);
    assert!((matches[0].confidence - 0.6).abs() < 1e-9);
}

#[test]
fn test_matches_sorted_by_confidence() {
    // "merck" leads the string and gets the leading bonus, "pfizer" does not.
    let matches = identify_companies("Merck & Co., Rahway, NJ; Pfizer, New York");
    assert!(matches.len() >= 2);
    assert_eq!(matches[0].company_name, "Merck");
    for pair in matches.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn test_academic_context_lowers_confidence() {
    let industry = identify_companies("Pfizer Inc., New York");
    let mixed = identify_companies("Joint lab of Pfizer and Yale University");
    assert!(mixed[0].confidence < industry[0].confidence);
}

#[test]
fn test_empty_affiliation_has_no_companies() {
    assert!(identify_companies("").is_empty());
}

#[test]
fn test_no_company_in_plain_academic_text() {
    assert!(identify_companies("Stanford University, Stanford, CA").is_empty());
}

#[test]
fn test_extract_company_names_applies_threshold() {
    let matches = identify_companies("Acme Therapeutics, San Diego, CA");
    assert_eq!(
        extract_company_names(&matches, DEFAULT_MIN_CONFIDENCE),
        vec!["Acme Therapeutics".to_string()]
    );
    assert!(extract_company_names(&matches, 0.7).is_empty());
}
