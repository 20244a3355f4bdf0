//! Report formatter tests.
//!
//! Tests actual output, read back through the csv and JSON parsers.

use pubmed_pharma_papers::formatters::{
    ReportFormat, format_json, save_to_file, write_csv, write_report,
};
use pubmed_pharma_papers::models::{HEADERS, PaperRecord};

fn sample_records() -> Vec<PaperRecord> {
    vec![
        PaperRecord {
            pubmed_id: "38000001".into(),
            title: "Efficacy of kinase inhibitors, a phase II study".into(),
            publication_date: "2023-11-05".into(),
            non_academic_authors: "Jane Doe; John Roe".into(),
            company_affiliations: "Novartis; Roche".into(),
            corresponding_author_email: "jane.doe@novartis.com".into(),
        },
        PaperRecord {
            pubmed_id: "38000003".into(),
            title: "No title".into(),
            publication_date: "1900-01-01".into(),
            non_academic_authors: "Roe".into(),
            company_affiliations: "Acme Therapeutics".into(),
            corresponding_author_email: String::new(),
        },
    ]
}

fn format_csv(records: &[PaperRecord]) -> String {
    let mut buf = Vec::new();
    write_csv(records, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// =============================================================================
// CSV
// =============================================================================

#[test]
fn test_csv_header_row() {
    let out = format_csv(&sample_records());
    let first_line = out.lines().next().unwrap();
    assert_eq!(
        first_line,
        "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),\
         Corresponding Author Email"
    );
}

#[test]
fn test_csv_reads_back() {
    let out = format_csv(&sample_records());
    let mut reader = csv::Reader::from_reader(out.as_bytes());

    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, HEADERS);

    let rows: Vec<PaperRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows, sample_records());
}

#[test]
fn test_csv_empty_records_write_nothing() {
    assert!(format_csv(&[]).is_empty());
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_json_keys_are_column_headers() {
    let out = format_json(&sample_records()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let first = value[0].as_object().unwrap();
    assert_eq!(first.len(), HEADERS.len());
    assert_eq!(first["Company Affiliation(s)"], "Novartis; Roche");
    assert_eq!(value[1]["Corresponding Author Email"], "");
}

#[test]
fn test_json_empty_records() {
    assert_eq!(format_json(&[]).unwrap(), "[]");
}

#[test]
fn test_write_report_dispatches_on_format() {
    let mut csv_out = Vec::new();
    write_report(&sample_records(), ReportFormat::Csv, &mut csv_out).unwrap();
    assert!(String::from_utf8(csv_out).unwrap().starts_with("PubmedID,"));

    let mut json_out = Vec::new();
    write_report(&sample_records(), ReportFormat::Json, &mut json_out).unwrap();
    let json_out = String::from_utf8(json_out).unwrap();
    assert!(json_out.starts_with('['));
    assert!(json_out.ends_with("]\n"));
}

#[test]
fn test_csv_is_default_format() {
    assert_eq!(ReportFormat::default(), ReportFormat::Csv);
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_save_to_file_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("2024").join("papers.csv");

    save_to_file(&sample_records(), &path, ReportFormat::Csv).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, format_csv(&sample_records()));
}

#[test]
fn test_save_to_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.json");

    save_to_file(&sample_records(), &path, ReportFormat::Json).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let decoded: Vec<PaperRecord> = serde_json::from_str(&written).unwrap();
    assert_eq!(decoded, sample_records());
}

#[test]
fn test_save_to_file_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.csv");
    std::fs::write(&path, "stale contents that are much longer than the new report\n".repeat(50))
        .unwrap();

    save_to_file(&sample_records()[..1], &path, ReportFormat::Csv).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("stale"));
    assert_eq!(written.lines().count(), 2);
}
