use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::AnyValue;

use mart_cli::pipeline::{AbortReason, RunReport, Stage};
use mart_model::MartTableKind;
use mart_transform::MartFrame;

pub fn print_summary(report: &RunReport, mart_path: &Path) {
    let extracted: Vec<String> = report
        .extracted
        .iter()
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect();
    println!("Extracted: {}", extracted.join(" "));
    match &report.load {
        Some(load) => println!("Mart: {} ({:?} load)", mart_path.display(), load.mode),
        None => println!("Mart: {} (dry run, nothing written)", mart_path.display()),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Rows"),
        header_cell("Loaded"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_rows = 0usize;
    for kind in MartTableKind::ALL {
        let rows = report.tables.row_count(kind);
        total_rows += rows;
        let loaded = report
            .load
            .as_ref()
            .is_some_and(|load| load.tables.iter().any(|table| table.kind == kind));
        table.add_row(vec![
            table_cell(kind),
            Cell::new(kind.description()),
            Cell::new(rows),
            loaded_cell(loaded),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All tables")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let stats = &report.stats;
    let mut lookups = Table::new();
    lookups.set_header(vec![header_cell("Lookup"), header_cell("Misses"), header_cell("Result")]);
    apply_table_style(&mut lookups);
    align_column(&mut lookups, 1, CellAlignment::Right);
    lookups.add_row(vec![
        Cell::new("Date"),
        count_cell(stats.unresolved_dates, Color::Yellow),
        dim_cell("DateKey empty"),
    ]);
    lookups.add_row(vec![
        Cell::new("Table"),
        count_cell(stats.unresolved_tables, Color::Yellow),
        dim_cell("TableKey empty"),
    ]);
    lookups.add_row(vec![
        Cell::new("Customer"),
        count_cell(stats.unknown_customers, Color::Blue),
        dim_cell("unknown diner C-1"),
    ]);
    lookups.add_row(vec![
        Cell::new("Employee"),
        count_cell(stats.unknown_employees, Color::Blue),
        dim_cell("unknown staff -1"),
    ]);
    println!("Fact lookups ({} reservations):", stats.reservations);
    println!("{lookups}");
}

pub fn print_abort(stage: Stage, reason: &AbortReason) {
    eprintln!("Aborted during {stage}: {reason}");
    if let AbortReason::LoadFailed(error) = reason
        && error.is_partial()
    {
        let committed: Vec<&str> = error
            .committed_tables()
            .iter()
            .map(|kind| kind.table_name())
            .collect();
        eprintln!(
            "Mart partially updated, already replaced: {}",
            committed.join(", ")
        );
    }
}

/// Print the first `rows` rows of every frame.
pub fn print_preview(frames: &[MartFrame], rows: usize) {
    for frame in frames {
        let mut table = Table::new();
        let columns = frame.data.get_columns();
        table.set_header(
            columns
                .iter()
                .map(|column| header_cell(column.name().as_str()))
                .collect::<Vec<_>>(),
        );
        apply_table_style(&mut table);
        for row in 0..rows.min(frame.record_count()) {
            let cells: Vec<Cell> = columns
                .iter()
                .map(|column| match column.get(row) {
                    Ok(value) => value_cell(&value),
                    Err(_) => dim_cell("?"),
                })
                .collect();
            table.add_row(cells);
        }
        println!();
        println!("{} ({} rows)", frame.table_name(), frame.record_count());
        println!("{table}");
    }
}

fn value_cell(value: &AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => dim_cell("NULL"),
        AnyValue::String(text) => Cell::new(*text),
        AnyValue::StringOwned(text) => Cell::new(text.as_str()),
        AnyValue::Int64(number) => Cell::new(number),
        AnyValue::Int32(number) => Cell::new(number),
        other => Cell::new(format!("{other:?}")),
    }
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(kind: MartTableKind) -> Cell {
    if kind.is_fact() {
        Cell::new(kind.table_name())
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(kind.table_name())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn loaded_cell(loaded: bool) -> Cell {
    if loaded {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
