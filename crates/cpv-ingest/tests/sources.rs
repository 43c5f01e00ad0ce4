//! Folding the configured sources from files on disk.

use std::fs;
use std::path::Path;

use cpv_ingest::{IngestError, SourceStatus, process_source};
use cpv_model::CpvMapping;
use cpv_standards::{DUTCH_GPP_SOURCE, LEGACY_GPP_SOURCE, SOURCES};

fn write_source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
    fs::write(path, content).expect("write csv");
}

fn listed(mapping: &CpvMapping, code: &str) -> Vec<String> {
    mapping
        .get(code)
        .unwrap_or_default()
        .iter()
        .map(|m| m.as_str().to_string())
        .collect()
}

#[test]
fn missing_file_leaves_mapping_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut mapping = CpvMapping::new();

    let stats = process_source(dir.path(), &SOURCES[0], &mut mapping).expect("soft failure");

    assert_eq!(stats.status, SourceStatus::Missing);
    assert_eq!(stats.processed, 0);
    assert!(mapping.is_empty());
}

#[test]
fn other_sources_still_populate_when_one_is_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_source(
        dir.path(),
        SOURCES[1].file,
        "CPV CODE,Omschrijving,Producten onder ecodesign\n\
         09310000-5,Elektriciteit,TRUE\n\
         30213000-5,Laptops,TRUE\n\
         03000000-1,Landbouwproducten,FALSE\n",
    );

    let mut mapping = CpvMapping::new();
    let mut statuses = Vec::new();
    for source in SOURCES {
        let stats = process_source(dir.path(), source, &mut mapping).expect("process source");
        statuses.push(stats.status);
    }

    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == SourceStatus::Missing)
            .count(),
        SOURCES.len() - 1
    );
    assert_eq!(mapping.len(), 2);
    assert_eq!(listed(&mapping, "30213000-5"), vec!["ecodesign_products"]);
}

#[test]
fn energy_label_and_ecodesign_merge_in_canonical_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_source(
        dir.path(),
        SOURCES[1].file,
        "CPV CODE,Producten onder ecodesign\n09310000-5,TRUE\n",
    );
    write_source(
        dir.path(),
        SOURCES[0].file,
        "\u{feff}CPV CODE,Producten met energielabel\n09310000-5,TRUE\n",
    );

    let mut mapping = CpvMapping::new();
    // Ecodesign first, so the energy label has to be sorted in front of it.
    let eco = process_source(dir.path(), &SOURCES[1], &mut mapping).expect("ecodesign");
    let energy = process_source(dir.path(), &SOURCES[0], &mut mapping).expect("energy label");

    assert_eq!((eco.new, eco.merged), (1, 0));
    assert_eq!((energy.new, energy.merged), (0, 1));
    assert_eq!(
        listed(&mapping, "09310000-5"),
        vec!["energy_label", "ecodesign_products"]
    );
}

#[test]
fn dutch_gpp_sheet_splits_multiple_categories() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_source(
        dir.path(),
        DUTCH_GPP_SOURCE.file,
        "CPV Code,Omschrijving,GPP Module(s)\n\
         39130000-2,Kantoormeubilair,Meubels; Elektriciteit\n\
         77310000-6,Aanleg van groenvoorzieningen,Ondehoud van de openbare ruimte\n\
         18000000-9,Kleding,Textiel\n\
         03000000-1,Landbouwproducten,\n",
    );

    let mut mapping = CpvMapping::new();
    let stats = process_source(dir.path(), &DUTCH_GPP_SOURCE, &mut mapping).expect("dutch gpp");

    assert_eq!(
        listed(&mapping, "39130000-2"),
        vec!["gpp-electricity", "gpp-furniture"]
    );
    assert_eq!(listed(&mapping, "77310000-6"), vec!["gpp-public-space"]);
    assert!(!mapping.contains("18000000-9"));
    assert!(!mapping.contains("03000000-1"));
    assert_eq!(stats.multi_module, 1);
    assert_eq!(stats.processed, 2);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.unresolved_names, 1);
}

#[test]
fn legacy_gpp_sheet_honors_skip_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_source(
        dir.path(),
        LEGACY_GPP_SOURCE.file,
        "CPV CODE,Mapped GPP\n\
         39130000-2,GPP: Furniture\n\
         03000000-1,GPP: Not applicable\n\
         09310000-5,GPP: Something else\n",
    );

    let mut mapping = CpvMapping::new();
    let stats = process_source(dir.path(), &LEGACY_GPP_SOURCE, &mut mapping).expect("legacy gpp");

    assert_eq!(listed(&mapping, "39130000-2"), vec!["gpp-furniture"]);
    assert_eq!(mapping.len(), 1);
    assert_eq!((stats.skipped, stats.unmatched), (1, 1));
}

#[test]
fn missing_configured_column_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_source(
        dir.path(),
        SOURCES[3].file,
        "CPV CODE,Tyres\n34350000-5,TRUE\n",
    );

    let mut mapping = CpvMapping::new();
    let error = process_source(dir.path(), &SOURCES[3], &mut mapping).unwrap_err();

    assert!(matches!(error, IngestError::MissingColumn { ref column, .. } if column == "Banden"));
    assert!(mapping.is_empty());
}
