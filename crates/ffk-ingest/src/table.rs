//! In-memory source table with source-specific column names.

/// Rows of a loaded file as trimmed strings, one vector per row, aligned with `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows skipped at load because every cell was blank.
    pub blank_rows: usize,
}

impl RawTable {
    /// Builds a table, normalizing headers and cells. Rows with no content are
    /// skipped and counted in `blank_rows`.
    pub fn from_raw<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|header| normalize_header(header.as_ref()))
            .collect();
        let width = headers.len();
        let mut blank_rows = 0usize;
        let rows = rows
            .into_iter()
            .filter(|row| {
                let has_content = row.iter().any(|value| !value.trim().is_empty());
                if !has_content {
                    blank_rows += 1;
                }
                has_content
            })
            .map(|row| {
                (0..width)
                    .map(|idx| {
                        row.get(idx)
                            .map(String::as_str)
                            .map(normalize_cell)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Self {
            headers,
            rows,
            blank_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at `row`/`column`, empty when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map_or("", String::as_str)
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers_and_pads_rows() {
        let table = RawTable::from_raw(
            ["\u{feff}Subject", "  Start   Date "],
            vec![
                vec![" Orgelprobe ".to_string()],
                vec![String::new(), "  ".to_string()],
            ],
        );
        assert_eq!(table.headers, vec!["Subject", "Start Date"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.blank_rows, 1);
        assert_eq!(table.rows[0], vec!["Orgelprobe", ""]);
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(5, 0), "");
    }
}
