//! Fixed-width console rendering.

use std::borrow::Cow;

use ffk_model::{AggregationTable, CategoryReport, Variant};

use crate::context::ReportContext;

#[derive(Debug, Clone, Copy)]
struct ConsoleLayout {
    rule_width: usize,
    section_prefix: &'static str,
    key_width: usize,
    value_width: usize,
    /// Width of the last value column.
    last_width: usize,
}

impl ConsoleLayout {
    fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Bookings => Self {
                rule_width: 70,
                section_prefix: "Veranstalter",
                key_width: 40,
                value_width: 12,
                last_width: 12,
            },
            Variant::Calendar => Self {
                rule_width: 80,
                section_prefix: "Kategorie",
                key_width: 20,
                value_width: 14,
                last_width: 10,
            },
        }
    }

    fn widths(&self, columns: usize) -> Vec<usize> {
        (0..columns)
            .map(|idx| {
                if idx + 1 == columns {
                    self.last_width
                } else {
                    self.value_width
                }
            })
            .collect()
    }
}

/// Renders the run header and one fixed-width table per category.
pub fn render_console(ctx: &ReportContext<'_>, report: &CategoryReport) -> String {
    let layout = ConsoleLayout::for_variant(ctx.variant);
    let heavy = "=".repeat(layout.rule_width);
    let light = "─".repeat(layout.rule_width);

    let mut lines = vec![
        heavy.clone(),
        format!("{} {}", ctx.title.to_uppercase(), ctx.year),
        heavy,
    ];
    for section in report {
        lines.push(String::new());
        lines.push(light.clone());
        lines.push(format!("{}: {}", layout.section_prefix, section.label));
        lines.push(light.clone());
        render_table(&layout, &section.table, &mut lines);
    }
    lines.push(String::new());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_table(layout: &ConsoleLayout, table: &AggregationTable, lines: &mut Vec<String>) {
    let widths = layout.widths(table.value_columns().len());
    let key_width = layout.key_width;

    let mut header = format!("{:<key_width$}", table.key_column().label);
    for (column, width) in table.value_columns().iter().zip(&widths) {
        let width = *width;
        header.push_str(&format!(" {:>width$}", abbreviate(&column.label, width)));
    }
    lines.push(header);

    let separator = std::iter::once(key_width)
        .chain(widths.iter().copied())
        .map(|width| "─".repeat(width))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(separator.clone());

    for (row, is_total) in table.iter_with_total() {
        if is_total {
            lines.push(separator.clone());
        }
        let mut line = format!("{:<key_width$}", row.label);
        for (value, width) in row.values.iter().zip(&widths) {
            let width = *width;
            line.push_str(&format!(" {value:>width$.2}"));
        }
        lines.push(line);
    }
}

/// Shortens a header that would not leave a space in its column.
///
/// Hyphenated labels keep their inner parts and reduce the outer ones to
/// initials (`Georges-Casalis-Saal` becomes `G.-Casalis-S.`); anything else is
/// cut and marked with a trailing dot.
fn abbreviate(label: &str, width: usize) -> Cow<'_, str> {
    if label.chars().count() < width {
        return Cow::Borrowed(label);
    }
    let parts: Vec<&str> = label.split('-').collect();
    if parts.len() >= 2 {
        let last = parts.len() - 1;
        let short = parts
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                if idx == 0 || idx == last {
                    initial(part)
                } else {
                    (*part).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("-");
        if short.chars().count() < width {
            return Cow::Owned(short);
        }
    }
    let kept = width.saturating_sub(2);
    Cow::Owned(label.chars().take(kept).chain(std::iter::once('.')).collect())
}

fn initial(part: &str) -> String {
    part.chars()
        .next()
        .map(|first| format!("{first}."))
        .unwrap_or_default()
}
