use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, warn};

use cpv_cli::pipeline::{BuildOptions, BuildResult, build_mapping};
use cpv_model::{ModuleId, known_modules};
use cpv_output::{Freshness, check_mapping, write_mapping};
use cpv_standards::{MANUAL_OVERRIDES, default_output_path, project_root, source_catalog};

use crate::cli::{GenerateArgs, LookupArgs, SourceArgs};
use crate::summary::apply_table_style;
use crate::types::{GenerateResult, LookupResult, OutputAction};

fn build_from_args(sources: &SourceArgs) -> Result<BuildResult> {
    let root = project_root(sources.root.as_deref());
    let options = BuildOptions {
        include_legacy_gpp: sources.legacy_gpp,
    };
    build_mapping(&root, &options)
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let build = build_from_args(&args.sources)?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&build.root));

    let action = if args.check {
        let freshness = check_mapping(&output_path, &build.mapping)
            .with_context(|| format!("check {}", output_path.display()))?;
        if freshness != Freshness::UpToDate {
            warn!(path = %output_path.display(), ?freshness, "mapping is out of date");
        }
        OutputAction::Checked(freshness)
    } else if args.dry_run {
        info!(path = %output_path.display(), "dry run, output not written");
        OutputAction::DryRun
    } else {
        let bytes = write_mapping(&output_path, &build.mapping)
            .with_context(|| format!("write {}", output_path.display()))?;
        OutputAction::Written { bytes }
    };

    Ok(GenerateResult {
        build,
        output_path,
        action,
    })
}

pub fn run_lookup(args: &LookupArgs) -> Result<LookupResult> {
    let build = build_from_args(&args.sources)?;
    let hits = args
        .codes
        .iter()
        .map(|code| {
            let code = code.trim();
            let modules: Option<Vec<String>> = build
                .mapping
                .get(code)
                .map(|list| list.iter().map(|m| m.as_str().to_string()).collect());
            (code.to_string(), modules)
        })
        .collect();
    Ok(LookupResult { hits })
}

pub fn run_modules() -> Result<()> {
    let catalog = source_catalog(true);
    let mut table = Table::new();
    table.set_header(vec!["#", "Module", "Sources"]);
    apply_table_style(&mut table);
    for (index, module) in known_modules().iter().enumerate() {
        let mut producers: Vec<String> = catalog
            .iter()
            .filter(|source| source.rule.modules().iter().any(|id| *id == module.as_str()))
            .map(|source| format!("{} ({})", source.name, source.rule.label()))
            .collect();
        if has_override(module) {
            producers.push("Manual".to_string());
        }
        table.add_row(vec![
            (index + 1).to_string(),
            module.to_string(),
            producers.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn has_override(module: &ModuleId) -> bool {
    MANUAL_OVERRIDES
        .iter()
        .any(|(_, modules)| modules.iter().any(|id| *id == module.as_str()))
}

