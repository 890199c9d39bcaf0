//! Delimited text reading through Polars.
//!
//! Files are decoded with the configured encoding first, so Polars always sees
//! UTF-8. Every column is read as a string; typing happens in the normalizer.

use std::io::Cursor;
use std::path::Path;

use encoding_rs::Encoding;
use polars::prelude::{AnyValue, CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::encoding::decode_bytes;
use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string;
use crate::table::RawTable;

/// Reads and decodes a delimited file.
pub fn read_delimited(
    path: &Path,
    delimiter: char,
    encoding: &'static Encoding,
) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (text, had_errors) = decode_bytes(&bytes, encoding);
    if had_errors {
        tracing::warn!(
            path = %path.display(),
            encoding = encoding.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    parse_delimited(&text, delimiter, path)
}

/// Parses already decoded delimited text. `path` is only used in errors.
pub fn parse_delimited(text: &str, delimiter: char, path: &Path) -> Result<RawTable> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let separator = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(IngestError::InvalidDelimiter { delimiter })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(separator)
                .with_truncate_ragged_lines(true),
        )
        .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(dataframe_to_table(&df))
}

fn dataframe_to_table(df: &DataFrame) -> RawTable {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let columns = df.get_columns();
    let rows = (0..df.height()).map(|idx| {
        columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect::<Vec<_>>()
    });
    RawTable::from_raw(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_semicolon_text_as_strings() {
        let text = "Subject;Start Date;Wo\nOrgelprobe;01.02.2025;Kirchensaal, Entrée\n";
        let table = parse_delimited(text, ';', Path::new("inline.csv")).unwrap();
        assert_eq!(table.headers, vec!["Subject", "Start Date", "Wo"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], "01.02.2025");
        assert_eq!(table.rows[0][2], "Kirchensaal, Entrée");
    }

    #[test]
    fn numeric_looking_columns_keep_their_text() {
        let table = parse_delimited("Raum,Dauer\nKirchensaal,3.50\n", ',', Path::new("x.csv"))
            .unwrap();
        assert_eq!(table.rows[0][1], "3.50");
    }

    #[test]
    fn empty_text_is_an_error() {
        let result = parse_delimited("  \n", ';', Path::new("empty.csv"));
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn rejects_multibyte_delimiter() {
        let result = parse_delimited("a§b\n1§2\n", '§', Path::new("x.csv"));
        assert!(matches!(result, Err(IngestError::InvalidDelimiter { .. })));
    }

    #[test]
    fn reads_latin1_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Subject;Wo\nR\xfcckbau;Entr\xe9e\n").unwrap();
        let table = read_delimited(file.path(), ';', encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(table.rows[0], vec!["Rückbau", "Entrée"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_delimited(
            Path::new("/nonexistent/teamup.csv"),
            ';',
            encoding_rs::UTF_8,
        );
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
