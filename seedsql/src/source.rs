use std::path::Path;

use tracing::debug;

use crate::bail;
use crate::conversions::text::TextFieldConverter;
use crate::error::{ErrorKind, SeedError, SeedResult};
use crate::types::SeedRow;

/// Reads the comma-delimited seed file at `path` into ordered [`SeedRow`]s.
///
/// The file must carry a header row whose columns match `column_order` exactly,
/// in the same order. Every data row is classified cell by cell through
/// [`TextFieldConverter`]; row order is preserved.
///
/// Fails with [`ErrorKind::SourceIoError`] when the file is missing or
/// unreadable and with [`ErrorKind::InvalidData`] when the delimiter structure
/// is malformed (ragged rows) or the header does not match.
pub fn read_rows(path: &Path, column_order: &[String]) -> SeedResult<Vec<SeedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    validate_header(&headers, column_order)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let values = record.iter().map(TextFieldConverter::from_raw).collect();
        rows.push(SeedRow::new(values));
    }

    debug!(rows = rows.len(), path = %path.display(), "read seed rows");

    Ok(rows)
}

fn validate_header(headers: &csv::StringRecord, column_order: &[String]) -> SeedResult<()> {
    let matches = headers.len() == column_order.len()
        && headers
            .iter()
            .zip(column_order)
            .all(|(actual, expected)| actual == expected);

    if !matches {
        bail!(
            ErrorKind::InvalidData,
            "Input header does not match the expected column order",
            format!(
                "expected [{}], found [{}]",
                column_order.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        );
    }

    Ok(())
}
