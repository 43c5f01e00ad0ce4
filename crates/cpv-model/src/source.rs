//! Static descriptors for the CSV reference sources.

use std::path::{Path, PathBuf};

/// How a source row's signal value decides which module (if any) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionRule {
    /// Include the row for `module` when the value equals `include_when`.
    Direct {
        module: &'static str,
        include_when: &'static str,
    },
    /// Map the value through `table`; values in `skip` are never included.
    ///
    /// Values found in neither list are dropped without a warning.
    Lookup {
        table: &'static [(&'static str, &'static str)],
        skip: &'static [&'static str],
    },
    /// Split the value on `delimiter` and resolve every segment through
    /// `table`. Unresolved segments are reported and dropped.
    MultiLookup {
        delimiter: char,
        table: &'static [(&'static str, &'static str)],
    },
}

impl InclusionRule {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "direct",
            Self::Lookup { .. } => "lookup",
            Self::MultiLookup { .. } => "multi-lookup",
        }
    }

    /// Modules this rule can produce, in table order.
    pub fn modules(&self) -> Vec<&'static str> {
        let mut modules: Vec<&'static str> = Vec::new();
        let mut push = |id: &'static str| {
            if !modules.contains(&id) {
                modules.push(id);
            }
        };
        match self {
            Self::Direct { module, .. } => push(*module),
            Self::Lookup { table, .. } | Self::MultiLookup { table, .. } => {
                for (_, module) in table.iter() {
                    push(*module);
                }
            }
        }
        modules
    }
}

/// One CSV reference file and how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Human-readable name used in logs and the summary report.
    pub name: &'static str,
    /// File path relative to the project root.
    pub file: &'static str,
    /// Header of the column holding the CPV code.
    pub cpv_column: &'static str,
    /// Header of the column holding the applicability signal.
    pub value_column: &'static str,
    pub rule: InclusionRule,
}

impl SourceDescriptor {
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.file)
    }
}
