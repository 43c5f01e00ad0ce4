//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Structural failures while reading a source. These abort the run.
///
/// A missing source file is not an error: the processor reports it and
/// moves on to the next source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, invalid UTF-8).
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A configured column is absent from the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A data row ends before a configured column.
    #[error("row at line {line} of {path} has no '{column}' field")]
    ShortRow {
        column: String,
        line: u64,
        path: PathBuf,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
