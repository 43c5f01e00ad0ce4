use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cpv_ingest::{SourceStats, SourceStatus};
use cpv_output::Freshness;

use crate::types::{GenerateResult, LookupResult, OutputAction};

pub fn print_summary(result: &GenerateResult) {
    let build = &result.build;
    println!("Project root: {}", build.root.display());
    println!("Output: {}", result.output_path.display());
    match result.action {
        OutputAction::Written { bytes } => println!("Written: {bytes} bytes"),
        OutputAction::DryRun => println!("Dry run: output not written"),
        OutputAction::Checked(Freshness::UpToDate) => println!("Check: up to date"),
        OutputAction::Checked(Freshness::Stale) => {
            eprintln!("Check: output is stale, re-run `cpv-mapping generate`");
        }
        OutputAction::Checked(Freshness::Missing) => eprintln!("Check: output file is missing"),
    }

    print_source_table(result);
    print_module_table(result);

    println!("TOTAL CPV codes in output: {}", build.mapping.len());
    println!(
        "CPV codes with multiple modules: {}",
        build.mapping.multi_module_count()
    );
}

fn print_source_table(result: &GenerateResult) {
    let build = &result.build;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Status"),
        header_cell("Processed"),
        header_cell("New"),
        header_cell("Merged"),
        header_cell("Multi"),
        header_cell("Skipped"),
        header_cell("Unmatched"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 1, CellAlignment::Center);

    for stats in &build.sources {
        table.add_row(source_row(stats));
    }
    let overrides = &build.overrides;
    table.add_row(vec![
        Cell::new("Manual")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(overrides.entries),
        count_cell(overrides.new, Color::Green),
        count_cell(overrides.merged, Color::Blue),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn source_row(stats: &SourceStats) -> Vec<Cell> {
    let name = Cell::new(&stats.name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold);
    if stats.status == SourceStatus::Missing {
        let mut row = vec![name, status_cell(stats.status)];
        row.extend((0..6).map(|_| dim_cell("-")));
        return row;
    }
    vec![
        name,
        status_cell(stats.status),
        Cell::new(stats.processed),
        count_cell(stats.new, Color::Green),
        count_cell(stats.merged, Color::Blue),
        count_cell(stats.multi_module, Color::Magenta),
        count_cell(stats.skipped, Color::DarkGrey),
        count_cell(stats.unmatched + stats.unresolved_names, Color::Yellow),
    ]
}

fn print_module_table(result: &GenerateResult) {
    let counts = result.build.mapping.module_counts();
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Module"), header_cell("CPV codes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (module, count) in counts {
        let label = if module.is_known() {
            Cell::new(module.as_str())
        } else {
            Cell::new(module.as_str()).fg(Color::Yellow)
        };
        table.add_row(vec![label, Cell::new(count)]);
    }
    println!();
    println!("Module breakdown:");
    println!("{table}");
}

pub fn print_lookup(result: &LookupResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("CPV code"), header_cell("Modules")]);
    apply_table_style(&mut table);
    for (code, modules) in &result.hits {
        let modules_cell = match modules {
            Some(list) => Cell::new(list.join(", ")),
            None => Cell::new("no obligations found").fg(Color::Yellow),
        };
        table.add_row(vec![Cell::new(code), modules_cell]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: SourceStatus) -> Cell {
    match status {
        SourceStatus::Loaded => Cell::new("✓").fg(Color::Green),
        SourceStatus::Missing => Cell::new("missing")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
