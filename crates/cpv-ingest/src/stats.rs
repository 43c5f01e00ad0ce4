//! Per-source counters reported after each pass. Purely observational.

use std::path::PathBuf;

use cpv_model::MergeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded,
    /// The file did not exist; the source contributed nothing.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStats {
    pub name: String,
    pub path: PathBuf,
    pub status: SourceStatus,
    /// Rows that contributed at least one module.
    pub processed: usize,
    /// Codes created by this source.
    pub new: usize,
    /// Module ids appended to codes that already existed.
    pub merged: usize,
    /// Rows resolving to more than one module.
    pub multi_module: usize,
    /// Rows excluded by the skip list, the sentinel check, or an empty signal.
    pub skipped: usize,
    /// Lookup rows whose value matched neither the table nor the skip list.
    pub unmatched: usize,
    /// Signal segments that no name in the lookup table resolved.
    pub unresolved_names: usize,
}

impl SourceStats {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            status: SourceStatus::Loaded,
            processed: 0,
            new: 0,
            merged: 0,
            multi_module: 0,
            skipped: 0,
            unmatched: 0,
            unresolved_names: 0,
        }
    }

    pub fn missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            status: SourceStatus::Missing,
            ..Self::new(name, path)
        }
    }

    pub fn is_missing(&self) -> bool {
        self.status == SourceStatus::Missing
    }

    /// Counts an included row and how the merge went.
    pub(crate) fn record(&mut self, outcome: MergeOutcome) {
        self.processed += 1;
        if outcome.is_created() {
            self.new += 1;
        }
        self.merged += outcome.appended();
    }
}

/// Counters for the manual override merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideStats {
    /// Override entries applied.
    pub entries: usize,
    pub new: usize,
    pub merged: usize,
}
