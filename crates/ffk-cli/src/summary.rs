use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{FileStatus, FileSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    println!("{}", summary_table(result));
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variant"),
        header_cell("Year"),
        header_cell("Source"),
        header_cell("Loaded"),
        header_cell("Dropped"),
        header_cell("Filtered"),
        header_cell("Aggregated"),
        header_cell("MD"),
        header_cell("CSV"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);
    align_column(&mut table, 8, CellAlignment::Center);

    let mut total_loaded = 0usize;
    let mut total_filtered = 0usize;
    for summary in &result.files {
        total_loaded += summary.counts.loaded;
        total_filtered += summary.counts.filtered;
        table.add_row(vec![
            Cell::new(result.variant)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.year),
            source_cell(summary),
            count_cell(summary, summary.counts.loaded),
            dropped_cell(summary),
            count_cell(summary, summary.counts.filtered),
            count_cell(summary, summary.counts.aggregated_rows),
            output_cell(summary.outputs.as_ref().map(|outputs| &outputs.markdown)),
            output_cell(summary.outputs.as_ref().map(|outputs| &outputs.csv)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} files", result.files.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_loaded).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_filtered).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

fn source_cell(summary: &FileSummary) -> Cell {
    match summary.status {
        FileStatus::Processed => Cell::new(&summary.source),
        FileStatus::Missing => Cell::new(format!("{} (missing)", summary.source)).fg(Color::Yellow),
        FileStatus::Failed => Cell::new(format!("{} (failed)", summary.source))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(summary: &FileSummary, value: usize) -> Cell {
    if summary.status == FileStatus::Processed {
        Cell::new(value)
    } else {
        dim_cell("-")
    }
}

fn dropped_cell(summary: &FileSummary) -> Cell {
    let dropped = summary.counts.dropped() + summary.counts.coerced_durations;
    match summary.status {
        FileStatus::Processed if dropped > 0 => Cell::new(dropped).fg(Color::Yellow),
        FileStatus::Processed => dim_cell(0),
        _ => dim_cell("-"),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
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
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
