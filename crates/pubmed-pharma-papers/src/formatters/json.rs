//! JSON report output.

use std::io::Write;

use crate::error::ReportResult;
use crate::models::PaperRecord;

/// Render records as a pretty-printed JSON array keyed by column header.
pub fn format_json(records: &[PaperRecord]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records as JSON followed by a newline.
pub fn write_json<W: Write>(records: &[PaperRecord], mut writer: W) -> ReportResult<()> {
    writer.write_all(format_json(records)?.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
