pub mod gpp;
pub mod overrides;
pub mod paths;
pub mod sources;

pub use gpp::{DUTCH_GPP_MODULES, ENGLISH_GPP_MODULES, ENGLISH_GPP_SKIP_VALUES};
pub use overrides::MANUAL_OVERRIDES;
pub use paths::{DEFAULT_OUTPUT_PATH, PROJECT_ROOT_ENV_VAR, default_output_path, project_root};
pub use sources::{DUTCH_GPP_SOURCE, LEGACY_GPP_SOURCE, SOURCES, source_catalog};
