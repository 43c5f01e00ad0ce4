//! Obligation module identifiers and their canonical order.
//!
//! Module lists are never sorted alphabetically. Each CPV code lists its
//! modules in the domain priority order below: product regulation first
//! (energy label, ecodesign, tyres), then the GPP sustainability categories,
//! then services, buildings and the general EED obligations.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical module order used for every module list in the mapping.
pub const MODULE_ORDER: &[&str] = &[
    "energy_label",
    "ecodesign_products",
    "tyres",
    "gpp-cleaning",
    "gpp-computers",
    "gpp-data-centres",
    "gpp-electricity",
    "gpp-food-catering",
    "gpp-furniture",
    "gpp-imaging-equipment",
    "gpp-office-buildings",
    "gpp-paints",
    "gpp-public-space",
    "gpp-road-design",
    "gpp-road-lighting",
    "gpp-road-transport",
    "gpp-textiles",
    "services_new_products",
    "buildings",
    "algemene_eed",
];

/// Identifier of an obligation module (e.g. `energy_label`, `gpp-furniture`).
///
/// The known vocabulary is [`MODULE_ORDER`], but the type accepts any token so
/// that an unknown identifier still round-trips and sorts after known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position in [`MODULE_ORDER`], or `None` for identifiers outside it.
    pub fn canonical_index(&self) -> Option<usize> {
        canonical_index(&self.0)
    }

    /// Whether this identifier belongs to the known vocabulary.
    pub fn is_known(&self) -> bool {
        self.canonical_index().is_some()
    }

    /// Sort key: known modules by canonical position, unknown ones after them.
    pub fn sort_key(&self) -> usize {
        self.canonical_index().unwrap_or(MODULE_ORDER.len())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModuleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ModuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ModuleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModuleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Position of a module identifier in [`MODULE_ORDER`].
pub fn canonical_index(id: &str) -> Option<usize> {
    MODULE_ORDER.iter().position(|known| *known == id)
}

/// Sorts module identifiers into canonical order.
///
/// The sort is stable, so unknown identifiers keep their relative order.
pub fn sort_canonical(modules: &mut [ModuleId]) {
    modules.sort_by_key(ModuleId::sort_key);
}

/// All known modules in canonical order.
pub fn known_modules() -> Vec<ModuleId> {
    MODULE_ORDER.iter().copied().map(ModuleId::from).collect()
}
