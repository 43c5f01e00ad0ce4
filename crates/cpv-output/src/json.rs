//! JSON rendering of the mapping.
//!
//! The document is an object of CPV code → module id array with keys in
//! lexicographic order, 2-space indentation and non-ASCII text written as-is.
//! There is no trailing newline, so files produced by earlier generators
//! compare byte-for-byte.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use cpv_model::CpvMapping;

use crate::error::{OutputError, Result};

/// Renders the mapping as pretty-printed JSON.
pub fn render_mapping(mapping: &CpvMapping) -> Result<String> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// Renders and writes the mapping to `path`, replacing any existing file.
///
/// Parent directories are created when missing. Returns the number of bytes
/// written.
pub fn write_mapping(path: &Path, mapping: &CpvMapping) -> Result<usize> {
    let document = render_mapping(mapping)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &document).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        codes = mapping.len(),
        bytes = document.len(),
        "mapping written"
    );
    Ok(document.len())
}

/// Whether the file on disk matches what would be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Compares the rendered mapping with the file at `path` without writing.
pub fn check_mapping(path: &Path, mapping: &CpvMapping) -> Result<Freshness> {
    let document = render_mapping(mapping)?;
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Freshness::Missing),
        Err(source) => {
            return Err(OutputError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let freshness = if existing == document {
        Freshness::UpToDate
    } else {
        Freshness::Stale
    };
    debug!(path = %path.display(), ?freshness, "checked mapping");
    Ok(freshness)
}
