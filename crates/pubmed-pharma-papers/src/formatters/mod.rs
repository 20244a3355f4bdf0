//! Report formatters for CSV and JSON.

mod csv;
mod json;

pub use self::csv::*;
pub use self::json::*;

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::PaperRecord;

/// Output format for reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// Write records in the given format.
pub fn write_report<W: Write>(
    records: &[PaperRecord],
    format: ReportFormat,
    writer: W,
) -> ReportResult<()> {
    match format {
        ReportFormat::Csv => write_csv(records, writer),
        ReportFormat::Json => write_json(records, writer),
    }
}

/// Write records to a file, creating parent directories as needed.
pub fn save_to_file(
    records: &[PaperRecord],
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> ReportResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    write_report(records, format, std::io::BufWriter::new(file))?;

    tracing::info!(path = %path.display(), records = records.len(), "Results saved");
    Ok(())
}

/// Write records to stdout.
pub fn print_to_console(records: &[PaperRecord], format: ReportFormat) -> ReportResult<()> {
    let stdout = std::io::stdout();
    write_report(records, format, stdout.lock())
}
