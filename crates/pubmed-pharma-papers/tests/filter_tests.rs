//! Record filter tests.
//!
//! One record per paper with at least one non-academic author; everything
//! else is dropped.

use pubmed_pharma_papers::build_records;
use pubmed_pharma_papers::filter::build_record;
use pubmed_pharma_papers::models::{Author, Paper, PaperRecord};

fn paper(id: &str, authors: Vec<Author>) -> Paper {
    Paper {
        pubmed_id: id.to_string(),
        title: format!("Title of {id}"),
        publication_date: "2023-05-01".to_string(),
        authors,
        ..Default::default()
    }
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_mixed_paper_keeps_only_industry_author() {
    let p = paper(
        "123",
        vec![
            Author::new("Jane Doe", "Novartis Pharmaceuticals Corporation, Basel"),
            Author::new("Bob Lee", "Dept. of Medicine, Stanford University"),
        ],
    );

    let records = build_records(&[p]);
    assert_eq!(
        records,
        vec![PaperRecord {
            pubmed_id: "123".into(),
            title: "Title of 123".into(),
            publication_date: "2023-05-01".into(),
            non_academic_authors: "Jane Doe".into(),
            company_affiliations: "Novartis".into(),
            corresponding_author_email: String::new(),
        }]
    );
}

#[test]
fn test_all_academic_papers_produce_no_records() {
    let papers = vec![
        paper("1", vec![Author::new("A", "Harvard Medical School, Boston")]),
        paper("2", vec![Author::new("B", "Mayo Clinic, Rochester, MN")]),
        paper("3", vec![Author::new("C", "")]),
    ];
    assert!(build_records(&papers).is_empty());
}

#[test]
fn test_output_preserves_input_order() {
    let papers = vec![
        paper("30", vec![Author::new("A", "Amgen Inc.")]),
        paper("10", vec![Author::new("B", "Biogen, Cambridge")]),
        paper("20", vec![Author::new("C", "Yale University")]),
        paper("40", vec![Author::new("D", "Gilead Sciences, Foster City")]),
    ];
    let ids: Vec<String> = build_records(&papers).into_iter().map(|r| r.pubmed_id).collect();
    assert_eq!(ids, vec!["30", "10", "40"]);
}

// =============================================================================
// Corresponding email
// =============================================================================

#[test]
fn test_corresponding_author_email_preferred() {
    let p = paper(
        "1",
        vec![
            Author::new("A One", "Pfizer Inc. a@x.com"),
            Author {
                email: Some("b@y.com".into()),
                is_corresponding: true,
                ..Author::new("B Two", "Pfizer Inc.")
            },
        ],
    );
    let record = build_record(&p).unwrap().unwrap();
    assert_eq!(record.corresponding_author_email, "b@y.com");
}

#[test]
fn test_first_email_used_without_corresponding_author() {
    let p = paper(
        "1",
        vec![
            Author::new("A One", "Stanford University. a@stanford.edu"),
            Author::new("B Two", "Pfizer Inc. b@pfizer.com"),
        ],
    );
    let record = build_record(&p).unwrap().unwrap();
    assert_eq!(record.corresponding_author_email, "a@stanford.edu");
}

#[test]
fn test_corresponding_marker_in_affiliation_text() {
    let p = paper(
        "1",
        vec![
            Author::new("A One", "Roche, Basel. a@roche.com"),
            Author::new("B Two", "Roche, Basel. Corresponding author. b@roche.com"),
        ],
    );
    let record = build_record(&p).unwrap().unwrap();
    assert_eq!(record.corresponding_author_email, "b@roche.com");
}

// =============================================================================
// Companies and authors
// =============================================================================

#[test]
fn test_companies_collected_across_authors_sorted() {
    let p = paper(
        "1",
        vec![
            Author::new("A One", "Sanofi, Paris"),
            Author::new("B Two", "AstraZeneca, Cambridge, UK"),
            Author::new("C Three", "Sanofi, Bridgewater, NJ"),
        ],
    );
    let record = build_record(&p).unwrap().unwrap();
    assert_eq!(record.company_affiliations, "Astrazeneca; Sanofi");
    assert_eq!(record.non_academic_authors, "A One; B Two; C Three");
}

#[test]
fn test_non_academic_author_without_named_company() {
    let p = paper("1", vec![Author::new("A One", "Basel. a@zeta-analytics.ch")]);
    let record = build_record(&p).unwrap().unwrap();
    assert_eq!(record.non_academic_authors, "A One");
    assert_eq!(record.company_affiliations, "");
    assert_eq!(record.corresponding_author_email, "a@zeta-analytics.ch");
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn test_malformed_paper_skipped_rest_kept() {
    let papers = vec![
        paper("", vec![Author::new("A", "Pfizer Inc.")]),
        paper("2", vec![Author::new("B", "Pfizer Inc.")]),
    ];
    let records = build_records(&papers);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pubmed_id, "2");
}
