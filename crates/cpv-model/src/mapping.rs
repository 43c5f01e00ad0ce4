//! The CPV code → obligation module accumulator.
//!
//! Every source fold and the manual overrides go through [`CpvMapping::merge`],
//! which keeps each code's module list duplicate-free and in canonical order.
//! Codes are stored in a `BTreeMap`, so iteration and serialization are
//! lexicographic regardless of insertion order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::module::{ModuleId, sort_canonical};

/// Result of merging modules into one CPV code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The code was not present and has been created.
    Created { modules: usize },
    /// The code existed and `appended` new modules were added to it.
    Extended { appended: usize },
    /// Nothing changed: the modules were already present, or none were given.
    Unchanged,
}

impl MergeOutcome {
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// Number of module ids appended to an existing code.
    pub fn appended(self) -> usize {
        match self {
            Self::Extended { appended } => appended,
            Self::Created { .. } | Self::Unchanged => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CpvMapping {
    entries: BTreeMap<String, Vec<ModuleId>>,
}

impl CpvMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `modules` into the list for `code`.
    ///
    /// New codes are created with the given modules; existing codes only gain
    /// modules they do not already list. The list is re-sorted into canonical
    /// order after any change. An empty `modules` slice never creates a code.
    pub fn merge(&mut self, code: &str, modules: &[ModuleId]) -> MergeOutcome {
        if modules.is_empty() {
            return MergeOutcome::Unchanged;
        }
        match self.entries.entry(code.to_string()) {
            Entry::Vacant(slot) => {
                let mut list: Vec<ModuleId> = Vec::with_capacity(modules.len());
                for module in modules {
                    if !list.contains(module) {
                        list.push(module.clone());
                    }
                }
                sort_canonical(&mut list);
                let count = list.len();
                slot.insert(list);
                MergeOutcome::Created { modules: count }
            }
            Entry::Occupied(mut slot) => {
                let list = slot.get_mut();
                let mut appended = 0;
                for module in modules {
                    if !list.contains(module) {
                        list.push(module.clone());
                        appended += 1;
                    }
                }
                if appended == 0 {
                    return MergeOutcome::Unchanged;
                }
                sort_canonical(list);
                MergeOutcome::Extended { appended }
            }
        }
    }

    /// Merges a single module into `code`.
    pub fn merge_one(&mut self, code: &str, module: &ModuleId) -> MergeOutcome {
        self.merge(code, std::slice::from_ref(module))
    }

    pub fn get(&self, code: &str) -> Option<&[ModuleId]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes with their module lists, in lexicographic code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ModuleId])> {
        self.entries
            .iter()
            .map(|(code, modules)| (code.as_str(), modules.as_slice()))
    }

    /// Number of codes listing more than one module.
    pub fn multi_module_count(&self) -> usize {
        self.entries.values().filter(|list| list.len() > 1).count()
    }

    /// Number of codes per module, most frequent first.
    ///
    /// Ties keep canonical module order.
    pub fn module_counts(&self) -> Vec<(ModuleId, usize)> {
        let mut counts: BTreeMap<&ModuleId, usize> = BTreeMap::new();
        for modules in self.entries.values() {
            for module in modules {
                *counts.entry(module).or_default() += 1;
            }
        }
        let mut ordered: Vec<(ModuleId, usize)> = counts
            .into_iter()
            .map(|(module, count)| (module.clone(), count))
            .collect();
        ordered.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.sort_key().cmp(&b.0.sort_key()))
                .then_with(|| a.0.cmp(&b.0))
        });
        ordered
    }
}
