use std::collections::HashMap;

use crate::module::ModuleId;

/// Exact-match table from a free-text source value to a module identifier.
///
/// Keys are matched verbatim after the caller trims them. Several names may
/// resolve to the same module (translations, alternative spellings, known
/// typos in the source data).
#[derive(Debug, Clone, Default)]
pub struct ModuleLookup {
    map: HashMap<String, ModuleId>,
}

impl ModuleLookup {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ModuleId>,
    {
        let mut map = HashMap::new();
        for (name, module) in entries {
            map.entry(name.as_ref().to_string())
                .or_insert_with(|| module.into());
        }
        Self { map }
    }

    /// Builds a lookup from a static `(name, module)` table.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(pairs.iter().map(|(name, module)| (*name, *module)))
    }

    pub fn get(&self, name: &str) -> Option<&ModuleId> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
