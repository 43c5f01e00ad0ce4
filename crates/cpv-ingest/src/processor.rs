//! Folding source rows and manual overrides into the mapping.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use cpv_model::{CpvMapping, InclusionRule, ModuleId, ModuleLookup, SourceDescriptor};

use crate::error::Result;
use crate::reader::{SourceRow, read_source_rows};
use crate::stats::{OverrideStats, SourceStats};

/// Reads one source below `root` and folds its rows into `mapping`.
///
/// A missing file is logged and yields [`SourceStats::missing`] with the
/// mapping untouched.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed, or
/// lacks a configured column.
pub fn process_source(
    root: &Path,
    source: &SourceDescriptor,
    mapping: &mut CpvMapping,
) -> Result<SourceStats> {
    let path = source.path_in(root);
    let span = info_span!("source", name = source.name, path = %path.display());
    let _guard = span.enter();

    if !path.is_file() {
        warn!("source file not found, skipping");
        return Ok(SourceStats::missing(source.name, path));
    }

    let start = Instant::now();
    let rows = read_source_rows(&path, source.cpv_column, source.value_column)?;
    let mut stats = fold_rows(source, &rows, mapping);
    stats.path = path;
    info!(
        rows = rows.len(),
        processed = stats.processed,
        new = stats.new,
        merged = stats.merged,
        multi_module = stats.multi_module,
        skipped = stats.skipped,
        unmatched = stats.unmatched,
        duration_ms = start.elapsed().as_millis(),
        "source folded"
    );
    Ok(stats)
}

/// Folds already-read rows of `source` into `mapping`.
pub fn fold_rows(
    source: &SourceDescriptor,
    rows: &[SourceRow],
    mapping: &mut CpvMapping,
) -> SourceStats {
    let mut stats = SourceStats::new(source.name, source.file);
    match source.rule {
        InclusionRule::Direct {
            module,
            include_when,
        } => {
            let module = ModuleId::from(module);
            for row in rows {
                if row.value != include_when {
                    stats.skipped += 1;
                    continue;
                }
                stats.record(mapping.merge_one(&row.cpv_code, &module));
            }
        }
        InclusionRule::Lookup { table, skip } => {
            let lookup = ModuleLookup::from_pairs(table);
            for row in rows {
                if row.value.is_empty() || skip.iter().any(|value| *value == row.value) {
                    stats.skipped += 1;
                    continue;
                }
                let Some(module) = lookup.get(&row.value) else {
                    debug!(
                        cpv = %row.cpv_code,
                        value = %row.value,
                        line = row.line,
                        "value not in lookup table"
                    );
                    stats.unmatched += 1;
                    continue;
                };
                stats.record(mapping.merge_one(&row.cpv_code, module));
            }
        }
        InclusionRule::MultiLookup { delimiter, table } => {
            let lookup = ModuleLookup::from_pairs(table);
            for row in rows {
                let resolved = resolve_segments(&row.value, delimiter, &lookup);
                for name in &resolved.unresolved {
                    warn!(
                        cpv = %row.cpv_code,
                        name = %name,
                        line = row.line,
                        "unknown module name"
                    );
                }
                stats.unresolved_names += resolved.unresolved.len();
                if resolved.modules.is_empty() {
                    stats.skipped += 1;
                    continue;
                }
                if resolved.modules.len() > 1 {
                    stats.multi_module += 1;
                }
                stats.record(mapping.merge(&row.cpv_code, &resolved.modules));
            }
        }
    }
    stats
}

/// Modules named by one delimited signal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSegments {
    /// Distinct modules in first-seen order.
    pub modules: Vec<ModuleId>,
    /// Non-empty segments the lookup did not know.
    pub unresolved: Vec<String>,
}

/// Splits `value` on `delimiter` and resolves each trimmed segment.
///
/// Empty segments (a blank field, a trailing delimiter) are ignored.
pub fn resolve_segments(value: &str, delimiter: char, lookup: &ModuleLookup) -> ResolvedSegments {
    let mut resolved = ResolvedSegments::default();
    for segment in value.split(delimiter).map(str::trim) {
        if segment.is_empty() {
            continue;
        }
        match lookup.get(segment) {
            Some(module) => {
                if !resolved.modules.contains(module) {
                    resolved.modules.push(module.clone());
                }
            }
            None => resolved.unresolved.push(segment.to_string()),
        }
    }
    resolved
}

/// Merges the hand-curated overrides into `mapping`.
pub fn apply_overrides(overrides: &[(&str, &[&str])], mapping: &mut CpvMapping) -> OverrideStats {
    let span = info_span!("overrides", entries = overrides.len());
    let _guard = span.enter();

    let mut stats = OverrideStats::default();
    for (code, modules) in overrides {
        let modules: Vec<ModuleId> = modules.iter().copied().map(ModuleId::from).collect();
        let outcome = mapping.merge(code, &modules);
        stats.entries += 1;
        if outcome.is_created() {
            stats.new += 1;
        }
        stats.merged += outcome.appended();
    }
    info!(new = stats.new, merged = stats.merged, "manual overrides merged");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cpv: &str, value: &str) -> SourceRow {
        SourceRow {
            line: 0,
            cpv_code: cpv.to_string(),
            value: value.to_string(),
        }
    }

    fn listed(mapping: &CpvMapping, code: &str) -> Vec<String> {
        mapping
            .get(code)
            .unwrap_or_default()
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }

    const TYRES: SourceDescriptor = SourceDescriptor {
        name: "Tyres",
        file: "tyres.csv",
        cpv_column: "CPV CODE",
        value_column: "Banden",
        rule: InclusionRule::Direct {
            module: "tyres",
            include_when: "TRUE",
        },
    };

    const ENGLISH_GPP: SourceDescriptor = SourceDescriptor {
        name: "GPP",
        file: "gpp.csv",
        cpv_column: "CPV CODE",
        value_column: "Mapped GPP",
        rule: InclusionRule::Lookup {
            table: &[("GPP: Furniture", "gpp-furniture")],
            skip: &["GPP: Not applicable"],
        },
    };

    const DUTCH_GPP: SourceDescriptor = SourceDescriptor {
        name: "Dutch GPP",
        file: "gpp-nl.csv",
        cpv_column: "CPV Code",
        value_column: "GPP Module(s)",
        rule: InclusionRule::MultiLookup {
            delimiter: ';',
            table: &[
                ("Meubels", "gpp-furniture"),
                ("Elektriciteit", "gpp-electricity"),
                ("Ondehoud van de openbare ruimte", "gpp-public-space"),
            ],
        },
    };

    #[test]
    fn direct_rule_requires_exact_sentinel() {
        let mut mapping = CpvMapping::new();
        let rows = [
            row("34350000-5", "TRUE"),
            row("34351000-2", "true"),
            row("34352000-9", "FALSE"),
            row("34353000-6", ""),
        ];
        let stats = fold_rows(&TYRES, &rows, &mut mapping);
        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains("34350000-5"));
        assert_eq!((stats.processed, stats.new, stats.skipped), (1, 1, 3));
    }

    #[test]
    fn direct_rule_counts_merges_into_existing_codes() {
        let mut mapping = CpvMapping::new();
        mapping.merge_one("34350000-5", &ModuleId::from("energy_label"));
        let stats = fold_rows(&TYRES, &[row("34350000-5", "TRUE")], &mut mapping);
        assert_eq!((stats.new, stats.merged), (0, 1));
        assert_eq!(listed(&mapping, "34350000-5"), vec!["energy_label", "tyres"]);
    }

    #[test]
    fn skip_values_never_touch_the_mapping() {
        let mut mapping = CpvMapping::new();
        mapping.merge_one("39130000-2", &ModuleId::from("energy_label"));
        let stats = fold_rows(
            &ENGLISH_GPP,
            &[
                row("39130000-2", "GPP: Not applicable"),
                row("03000000-1", "GPP: Not applicable"),
            ],
            &mut mapping,
        );
        assert_eq!(stats.skipped, 2);
        assert_eq!(listed(&mapping, "39130000-2"), vec!["energy_label"]);
        assert!(!mapping.contains("03000000-1"));
    }

    #[test]
    fn unmatched_lookup_values_are_dropped_quietly() {
        let mut mapping = CpvMapping::new();
        let stats = fold_rows(
            &ENGLISH_GPP,
            &[row("39130000-2", "GPP: Furniture"), row("03000000-1", "GPP: Unknown")],
            &mut mapping,
        );
        assert_eq!((stats.processed, stats.unmatched, stats.skipped), (1, 1, 0));
        assert_eq!(listed(&mapping, "39130000-2"), vec!["gpp-furniture"]);
        assert!(!mapping.contains("03000000-1"));
    }

    #[test]
    fn multi_module_rows_produce_every_module_once() {
        let mut mapping = CpvMapping::new();
        let stats = fold_rows(
            &DUTCH_GPP,
            &[row("39130000-2", "Meubels; Elektriciteit")],
            &mut mapping,
        );
        assert_eq!(
            listed(&mapping, "39130000-2"),
            vec!["gpp-electricity", "gpp-furniture"]
        );
        assert_eq!((stats.processed, stats.new, stats.multi_module), (1, 1, 1));
    }

    #[test]
    fn unknown_names_are_dropped_without_spurious_modules() {
        let mut mapping = CpvMapping::new();
        let stats = fold_rows(
            &DUTCH_GPP,
            &[
                row("39130000-2", "Meubles; Meubels"),
                row("03000000-1", "Levensmiddelen"),
                row("09310000-5", ""),
            ],
            &mut mapping,
        );
        assert_eq!(listed(&mapping, "39130000-2"), vec!["gpp-furniture"]);
        assert!(!mapping.contains("03000000-1"));
        assert!(!mapping.contains("09310000-5"));
        assert_eq!(stats.unresolved_names, 2);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.multi_module, 0);
    }

    #[test]
    fn known_typo_resolves_to_the_correct_module() {
        let mut mapping = CpvMapping::new();
        fold_rows(
            &DUTCH_GPP,
            &[row("77310000-6", "Ondehoud van de openbare ruimte")],
            &mut mapping,
        );
        assert_eq!(listed(&mapping, "77310000-6"), vec!["gpp-public-space"]);
    }

    #[test]
    fn resolve_segments_ignores_blank_segments_and_duplicates() {
        let lookup = ModuleLookup::from_pairs(&[("Meubels", "gpp-furniture")]);
        let resolved = resolve_segments(" Meubels ;; Meubels; ", ';', &lookup);
        assert_eq!(resolved.modules, vec![ModuleId::from("gpp-furniture")]);
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn overrides_create_and_extend() {
        let mut mapping = CpvMapping::new();
        mapping.merge_one("45000000-7", &ModuleId::from("energy_label"));
        let stats = apply_overrides(
            &[("45000000-7", &["buildings"]), ("90510000-5", &["algemene_eed"])],
            &mut mapping,
        );
        assert_eq!(stats, OverrideStats { entries: 2, new: 1, merged: 1 });
        assert_eq!(listed(&mapping, "45000000-7"), vec!["energy_label", "buildings"]);
        assert_eq!(listed(&mapping, "90510000-5"), vec!["algemene_eed"]);
    }
}
