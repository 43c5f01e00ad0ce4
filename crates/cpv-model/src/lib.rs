pub mod lookup;
pub mod mapping;
pub mod module;
pub mod source;

pub use lookup::ModuleLookup;
pub use mapping::{CpvMapping, MergeOutcome};
pub use module::{MODULE_ORDER, ModuleId, canonical_index, known_modules, sort_canonical};
pub use source::{InclusionRule, SourceDescriptor};
