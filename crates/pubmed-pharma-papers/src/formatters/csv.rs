//! CSV report output.

use std::io::Write;

use crate::error::ReportResult;
use crate::models::{HEADERS, PaperRecord};

/// Write records as CSV with a header row.
///
/// Writes nothing at all when there are no records.
pub fn write_csv<W: Write>(records: &[PaperRecord], writer: W) -> ReportResult<()> {
    if records.is_empty() {
        tracing::warn!("No records to write to CSV");
        return Ok(());
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;

    tracing::info!(records = records.len(), "Wrote CSV records");
    Ok(())
}
