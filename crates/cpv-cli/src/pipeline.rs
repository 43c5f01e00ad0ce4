//! End-to-end mapping build: sources in catalog order, then overrides.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cpv_ingest::{OverrideStats, SourceStats, apply_overrides, process_source};
use cpv_model::CpvMapping;
use cpv_standards::{MANUAL_OVERRIDES, source_catalog};

/// Options for one mapping build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Also fold the retired English GPP sheet.
    pub include_legacy_gpp: bool,
}

/// The finished mapping plus everything needed for the summary report.
#[derive(Debug)]
pub struct BuildResult {
    pub root: PathBuf,
    pub mapping: CpvMapping,
    pub sources: Vec<SourceStats>,
    pub overrides: OverrideStats,
}

impl BuildResult {
    pub fn missing_sources(&self) -> impl Iterator<Item = &SourceStats> {
        self.sources.iter().filter(|stats| stats.is_missing())
    }
}

/// Builds the consolidated mapping from the sources below `root`.
///
/// # Errors
///
/// Fails on the first structural error in a source (unreadable file,
/// malformed CSV, missing column). Missing files are not errors.
pub fn build_mapping(root: &Path, options: &BuildOptions) -> Result<BuildResult> {
    let span = info_span!("build", root = %root.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut mapping = CpvMapping::new();
    let mut sources = Vec::new();
    for source in source_catalog(options.include_legacy_gpp) {
        let stats = process_source(root, &source, &mut mapping)
            .with_context(|| format!("process source {}", source.name))?;
        sources.push(stats);
    }
    let overrides = apply_overrides(MANUAL_OVERRIDES, &mut mapping);

    info!(
        codes = mapping.len(),
        sources = sources.len(),
        duration_ms = start.elapsed().as_millis(),
        "mapping built"
    );
    Ok(BuildResult {
        root: root.to_path_buf(),
        mapping,
        sources,
        overrides,
    })
}
