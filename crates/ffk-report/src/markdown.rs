//! Markdown rendering.

use ffk_model::{AggregationTable, CategoryReport};

use crate::context::ReportContext;

/// Renders title, source, filter criteria and one table per category.
/// The total row is set in bold.
pub fn render_markdown(ctx: &ReportContext<'_>, report: &CategoryReport) -> String {
    let mut lines = vec![
        format!("# {} {}\n", ctx.title, ctx.year),
        format!("Quelle: `{}`\n", ctx.source_name),
        "## Filterkriterien\n".to_string(),
    ];
    lines.extend(ctx.criteria.iter().map(|line| format!("- {line}")));
    lines.push(String::new());

    for section in report {
        lines.push(format!("## {}\n", section.label));
        table_lines(&section.table, &mut lines);
        lines.push(String::new());
    }
    lines.join("\n")
}

fn table_lines(table: &AggregationTable, lines: &mut Vec<String>) {
    let key = &table.key_column().label;
    let labels: Vec<&str> = std::iter::once(key.as_str())
        .chain(table.value_columns().iter().map(|column| column.label.as_str()))
        .collect();
    lines.push(format!("| {} |", labels.join(" | ")));

    let alignment: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let dashes = "-".repeat(label.chars().count() + 1);
            if idx == 0 {
                format!(":{dashes}")
            } else {
                format!("{dashes}:")
            }
        })
        .collect();
    lines.push(format!("|{}|", alignment.join("|")));

    for (row, is_total) in table.iter_with_total() {
        let bold = if is_total { "**" } else { "" };
        let cells: Vec<String> = std::iter::once(format!("{bold}{}{bold}", row.label))
            .chain(row.values.iter().map(|value| format!("{bold}{value:.2}{bold}")))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
}
