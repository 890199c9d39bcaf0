//! Combined CSV rendering.

use anyhow::{Context, Result};

use ffk_model::CategoryReport;

pub const CATEGORY_COLUMN: &str = "Kategorie";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Renders all category tables, total rows included, as one CSV table with a
/// leading category column. Values are written with two decimals and the
/// output starts with a UTF-8 byte order mark.
pub fn render_csv(report: &CategoryReport) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    let Some(first) = report.iter().next() else {
        return Ok(buffer);
    };
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        let header = std::iter::once(CATEGORY_COLUMN)
            .chain(std::iter::once(first.table.key_column().csv_name.as_str()))
            .chain(
                first
                    .table
                    .value_columns()
                    .iter()
                    .map(|column| column.csv_name.as_str()),
            );
        writer.write_record(header).context("write CSV header")?;

        for section in report {
            for (row, _) in section.table.iter_with_total() {
                let record = [section.label.clone(), row.label.clone()]
                    .into_iter()
                    .chain(row.values.iter().map(|value| format!("{value:.2}")));
                writer
                    .write_record(record)
                    .with_context(|| format!("write CSV row {} / {}", section.label, row.label))?;
            }
        }
        writer.flush().context("flush CSV output")?;
    }
    Ok(buffer)
}
