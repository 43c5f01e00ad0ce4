/// CPV codes that need modules but are absent from every source sheet.
///
/// Merged after all sources with the same semantics as a CSV row.
pub const MANUAL_OVERRIDES: &[(&str, &[&str])] = &[
    ("90510000-5", &["algemene_eed"]),
    ("45000000-7", &["buildings"]),
    ("55522000-5", &["algemene_eed"]),
    ("39130000-2", &["gpp-furniture"]),
];
