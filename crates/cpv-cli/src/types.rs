use std::path::PathBuf;

use cpv_cli::pipeline::BuildResult;
use cpv_output::Freshness;

#[derive(Debug)]
pub struct GenerateResult {
    pub build: BuildResult,
    pub output_path: PathBuf,
    pub action: OutputAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    Written { bytes: usize },
    DryRun,
    Checked(Freshness),
}

impl GenerateResult {
    /// A `--check` run whose output file is stale or absent.
    pub fn is_out_of_date(&self) -> bool {
        matches!(
            self.action,
            OutputAction::Checked(Freshness::Stale | Freshness::Missing)
        )
    }
}

#[derive(Debug)]
pub struct LookupResult {
    pub hits: Vec<(String, Option<Vec<String>>)>,
}

impl LookupResult {
    pub fn all_found(&self) -> bool {
        self.hits.iter().all(|(_, modules)| modules.is_some())
    }
}
