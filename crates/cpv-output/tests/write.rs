use std::fs;

use cpv_model::{CpvMapping, ModuleId};
use cpv_output::{Freshness, check_mapping, render_mapping, write_mapping};

fn build(order: &[(&str, &str)]) -> CpvMapping {
    let mut mapping = CpvMapping::new();
    for (code, module) in order {
        mapping.merge_one(code, &ModuleId::from(*module));
    }
    mapping
}

const MERGES: &[(&str, &str)] = &[
    ("45000000-7", "buildings"),
    ("34350000-5", "tyres"),
    ("34350000-5", "energy_label"),
    ("03000000-1", "gpp-food-catering"),
    ("45000000-7", "algemene_eed"),
];

#[test]
fn output_is_independent_of_merge_order() {
    let forward = build(MERGES);
    let mut reversed = MERGES.to_vec();
    reversed.reverse();
    let backward = build(&reversed);

    assert_eq!(
        render_mapping(&forward).unwrap(),
        render_mapping(&backward).unwrap()
    );
}

#[test]
fn write_then_check_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("src/data/cpv-mapping-from-csv.json");
    let mapping = build(MERGES);

    assert_eq!(check_mapping(&path, &mapping).unwrap(), Freshness::Missing);

    let bytes = write_mapping(&path, &mapping).expect("write mapping");
    assert_eq!(bytes, fs::read(&path).unwrap().len());
    assert_eq!(check_mapping(&path, &mapping).unwrap(), Freshness::UpToDate);

    let mut changed = mapping.clone();
    changed.merge_one("90510000-5", &ModuleId::from("algemene_eed"));
    assert_eq!(check_mapping(&path, &changed).unwrap(), Freshness::Stale);
}

#[test]
fn rewriting_replaces_previous_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mapping.json");
    fs::write(&path, "{\n  \"stale\": []\n}\n").unwrap();

    let mapping = build(&[("39130000-2", "gpp-furniture")]);
    write_mapping(&path, &mapping).expect("write mapping");

    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("stale"));
    assert_eq!(written, render_mapping(&mapping).unwrap());
}
