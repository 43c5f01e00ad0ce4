//! Reading the two configured columns out of a source CSV.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// One data row reduced to the CPV code and the signal value, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line of the record in the file (header is line 1).
    pub line: u64,
    pub cpv_code: String,
    pub value: String,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim_matches('\u{feff}').trim()
}

fn header_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| normalize_header(h) == name)
}

fn field(record: &StringRecord, index: usize) -> Option<String> {
    record.get(index).map(|value| value.trim().to_string())
}

/// Reads `cpv_column` and `value_column` from every row of the file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read, the CSV is malformed, either
/// column is missing from the header, or a row ends before one of them.
/// Rows may otherwise be longer or shorter than the header.
pub fn read_source_rows(path: &Path, cpv_column: &str, value_column: &str) -> Result<Vec<SourceRow>> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(file, path, cpv_column, value_column)
}

/// Same as [`read_source_rows`] over any reader; `path` is used for errors.
pub fn read_rows_from<R: Read>(
    input: R,
    path: &Path,
    cpv_column: &str,
    value_column: &str,
) -> Result<Vec<SourceRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .clone();

    let missing = |column: &str| IngestError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    };
    let cpv_index = header_index(&headers, cpv_column).ok_or_else(|| missing(cpv_column))?;
    let value_index = header_index(&headers, value_column).ok_or_else(|| missing(value_column))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let short = |column: &str| IngestError::ShortRow {
            column: column.to_string(),
            line,
            path: path.to_path_buf(),
        };
        rows.push(SourceRow {
            line,
            cpv_code: field(&record, cpv_index).ok_or_else(|| short(cpv_column))?,
            value: field(&record, value_index).ok_or_else(|| short(value_column))?,
        });
    }
    Ok(rows)
}
