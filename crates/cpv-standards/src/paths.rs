//! Project root and output path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the project root.
pub const PROJECT_ROOT_ENV_VAR: &str = "CPV_MAPPING_ROOT";

/// Generated mapping, relative to the project root.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/cpv-mapping-from-csv.json";

/// Get the project root directory.
///
/// Resolution order:
/// 1. explicit path (the `--root` flag)
/// 2. `CPV_MAPPING_ROOT` environment variable
/// 3. the current directory
pub fn project_root(explicit: Option<&Path>) -> PathBuf {
    resolve_root(explicit, std::env::var(PROJECT_ROOT_ENV_VAR).ok().as_deref())
}

fn resolve_root(explicit: Option<&Path>, env_root: Option<&str>) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    if let Some(root) = env_root
        && !root.trim().is_empty()
    {
        return PathBuf::from(root);
    }
    PathBuf::from(".")
}

pub fn default_output_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_OUTPUT_PATH)
}
