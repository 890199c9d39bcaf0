//! Spreadsheet reading through calamine. Only the first sheet is read.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::polars_utils::format_numeric;
use crate::table::RawTable;

/// Reads the first worksheet; its first row holds the column names.
pub fn read_workbook(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header.iter().map(cell_to_string).collect();
    let body = rows.map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
    Ok(RawTable::from_raw(headers, body))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_like_their_text() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::String("Vtg ok".to_string())), "Vtg ok");
    }

    #[test]
    fn missing_workbook_is_reported() {
        let result = read_workbook(Path::new("/nonexistent/VA_Buchungen.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
