//! Aggregation tables.
//!
//! A table is built once per category and never changed afterwards. Non-empty
//! tables end with a synthetic [`GRAND_TOTAL_LABEL`] row holding the column sums;
//! empty tables keep their column shape and have no total row.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Label of the grand-total row.
pub const GRAND_TOTAL_LABEL: &str = "GESAMT";

/// A table column: the header shown in console and Markdown, and the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub label: String,
    pub csv_name: String,
}

impl ColumnSpec {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            csv_name: label.clone(),
            label,
        }
    }

    #[must_use]
    pub fn with_csv_name(mut self, csv_name: impl Into<String>) -> Self {
        self.csv_name = csv_name.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl AggregationRow {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationTable {
    key_column: ColumnSpec,
    value_columns: Vec<ColumnSpec>,
    rows: Vec<AggregationRow>,
    total: Option<AggregationRow>,
}

impl AggregationTable {
    /// An empty table with the given column shape.
    pub fn empty(key_column: ColumnSpec, value_columns: Vec<ColumnSpec>) -> Self {
        Self {
            key_column,
            value_columns,
            rows: Vec::new(),
            total: None,
        }
    }

    /// Builds a table from grouped rows, sorted by label, and appends the total row.
    pub fn from_groups(
        key_column: ColumnSpec,
        value_columns: Vec<ColumnSpec>,
        mut rows: Vec<AggregationRow>,
    ) -> Result<Self> {
        let width = value_columns.len();
        if let Some(row) = rows.iter().find(|row| row.values.len() != width) {
            return Err(ModelError::RowShape {
                label: row.label.clone(),
                expected: width,
                found: row.values.len(),
            });
        }
        if rows.is_empty() {
            return Ok(Self::empty(key_column, value_columns));
        }
        rows.sort_by(|a, b| a.label.cmp(&b.label));
        let mut sums = vec![0.0; width];
        for row in &rows {
            for (sum, value) in sums.iter_mut().zip(&row.values) {
                *sum += value;
            }
        }
        Ok(Self {
            key_column,
            value_columns,
            rows,
            total: Some(AggregationRow::new(GRAND_TOTAL_LABEL, sums)),
        })
    }

    pub fn key_column(&self) -> &ColumnSpec {
        &self.key_column
    }

    pub fn value_columns(&self) -> &[ColumnSpec] {
        &self.value_columns
    }

    /// Group rows, without the total row.
    pub fn rows(&self) -> &[AggregationRow] {
        &self.rows
    }

    pub fn total(&self) -> Option<&AggregationRow> {
        self.total.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Group rows followed by the total row; the flag marks the total.
    pub fn iter_with_total(&self) -> impl Iterator<Item = (&AggregationRow, bool)> {
        self.rows
            .iter()
            .map(|row| (row, false))
            .chain(self.total.iter().map(|row| (row, true)))
    }

    /// Looks up a cell by row label and value-column label. `GESAMT` addresses the total row.
    pub fn value(&self, row_label: &str, column_label: &str) -> Option<f64> {
        let column = self
            .value_columns
            .iter()
            .position(|column| column.label == column_label)?;
        self.iter_with_total()
            .find(|(row, _)| row.label == row_label)
            .and_then(|(row, _)| row.values.get(column).copied())
    }
}

/// One category section of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub label: String,
    pub table: AggregationTable,
}

/// Aggregation tables keyed by category label, in category priority order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryReport {
    sections: Vec<CategoryTable>,
}

impl CategoryReport {
    pub fn new(sections: Vec<CategoryTable>) -> Self {
        Self { sections }
    }

    pub fn get(&self, label: &str) -> Option<&AggregationTable> {
        self.sections
            .iter()
            .find(|section| section.label == label)
            .map(|section| &section.table)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTable> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of group rows over all sections, total rows excluded.
    pub fn row_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.table.rows().len())
            .sum()
    }
}

impl<'a> IntoIterator for &'a CategoryReport {
    type Item = &'a CategoryTable;
    type IntoIter = std::slice::Iter<'a, CategoryTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
