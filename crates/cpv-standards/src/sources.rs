//! The CSV reference sources, in processing order.

use cpv_model::{InclusionRule, SourceDescriptor};

use crate::gpp::{DUTCH_GPP_MODULES, ENGLISH_GPP_MODULES, ENGLISH_GPP_SKIP_VALUES};

const INCLUDE_WHEN_TRUE: &str = "TRUE";

/// Single-module sheets with a `TRUE`/`FALSE` applicability column.
pub const SOURCES: &[SourceDescriptor] = &[
    SourceDescriptor {
        name: "Energy Label",
        file: "data/sources/cpv-energylabel-mapping.csv",
        cpv_column: "CPV CODE",
        value_column: "Producten met energielabel",
        rule: InclusionRule::Direct {
            module: "energy_label",
            include_when: INCLUDE_WHEN_TRUE,
        },
    },
    SourceDescriptor {
        name: "Ecodesign",
        file: "data/sources/cpv-ecodesign-mapping.csv",
        cpv_column: "CPV CODE",
        value_column: "Producten onder ecodesign",
        rule: InclusionRule::Direct {
            module: "ecodesign_products",
            include_when: INCLUDE_WHEN_TRUE,
        },
    },
    SourceDescriptor {
        name: "Services",
        file: "data/sources/cpv-services-mapping.csv",
        cpv_column: "CPV CODE",
        value_column: "Diensten",
        rule: InclusionRule::Direct {
            module: "services_new_products",
            include_when: INCLUDE_WHEN_TRUE,
        },
    },
    SourceDescriptor {
        name: "Tyres",
        file: "data/sources/cpv-tires-mapping.csv",
        cpv_column: "CPV CODE",
        value_column: "Banden",
        rule: InclusionRule::Direct {
            module: "tyres",
            include_when: INCLUDE_WHEN_TRUE,
        },
    },
    SourceDescriptor {
        name: "Buildings",
        file: "data/sources/cpv-buildings-mapping.csv",
        cpv_column: "CPV CODE",
        value_column: "Gebouwen",
        rule: InclusionRule::Direct {
            module: "buildings",
            include_when: INCLUDE_WHEN_TRUE,
        },
    },
];

/// Retired English GPP sheet, one category per row.
pub const LEGACY_GPP_SOURCE: SourceDescriptor = SourceDescriptor {
    name: "GPP (legacy)",
    file: "data/sources/cpv-gpp-mapping.csv",
    cpv_column: "CPV CODE",
    value_column: "Mapped GPP",
    rule: InclusionRule::Lookup {
        table: ENGLISH_GPP_MODULES,
        skip: ENGLISH_GPP_SKIP_VALUES,
    },
};

/// Dutch GPP sheet where one row may list several categories.
pub const DUTCH_GPP_SOURCE: SourceDescriptor = SourceDescriptor {
    name: "Dutch GPP (2024-11-24)",
    file: "data/sources/cpv-gpp-mapping-2024-11-24.csv",
    cpv_column: "CPV Code",
    value_column: "GPP Module(s)",
    rule: InclusionRule::MultiLookup {
        delimiter: ';',
        table: DUTCH_GPP_MODULES,
    },
};

/// All sources for one run, in the order they are folded.
///
/// The legacy GPP sheet, when enabled, runs after the single-module sheets
/// and before the Dutch GPP sheet.
pub fn source_catalog(include_legacy_gpp: bool) -> Vec<SourceDescriptor> {
    let mut catalog: Vec<SourceDescriptor> = SOURCES.to_vec();
    if include_legacy_gpp {
        catalog.push(LEGACY_GPP_SOURCE);
    }
    catalog.push(DUTCH_GPP_SOURCE);
    catalog
}
