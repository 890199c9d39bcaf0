//! Format dispatch by file extension.

use std::path::Path;

use crate::csv::read_delimited;
use crate::encoding::resolve_encoding;
use crate::error::{IngestError, Result};
use crate::table::RawTable;
use crate::workbook::read_workbook;

/// File formats with a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.csv`, `.txt`, `.tsv`
    Delimited,
    /// `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`
    Workbook,
}

impl SourceFormat {
    /// Detects the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "txt" | "tsv" => Ok(SourceFormat::Delimited),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// How delimited files are decoded and split. Ignored for workbooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: char,
    pub encoding: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            encoding: "utf-8".to_string(),
        }
    }
}

impl LoadOptions {
    pub fn new(delimiter: char, encoding: impl Into<String>) -> Self {
        Self {
            delimiter,
            encoding: encoding.into(),
        }
    }
}

/// Loads a source file into a [`RawTable`].
///
/// # Errors
///
/// Fails for unknown extensions and encodings, unreadable files and files
/// without a header row.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<RawTable> {
    let format = SourceFormat::from_path(path)?;
    let table = match format {
        SourceFormat::Delimited => {
            let encoding = resolve_encoding(&options.encoding).ok_or_else(|| {
                IngestError::UnsupportedEncoding {
                    path: path.to_path_buf(),
                    label: options.encoding.clone(),
                }
            })?;
            read_delimited(path, options.delimiter, encoding)?
        }
        SourceFormat::Workbook => read_workbook(path)?,
    };
    tracing::debug!(
        path = %path.display(),
        format = ?format,
        columns = table.headers.len(),
        rows = table.len(),
        "table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("teamup_2024-raw.xlsx.csv")).unwrap(),
            SourceFormat::Delimited
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("VA_Buchungen_evis_2025.XLSX")).unwrap(),
            SourceFormat::Workbook
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("bookings.pdf")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(SourceFormat::from_path(Path::new("bookings")).is_err());
    }
}
