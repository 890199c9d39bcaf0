//! Error types for loading and normalizing source exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No loader exists for the file extension.
    #[error("unsupported file format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Text Errors ===
    /// Encoding label not known to encoding_rs.
    #[error("unsupported encoding '{label}' for {path}")]
    UnsupportedEncoding { path: PathBuf, label: String },

    /// Delimiter is not a single-byte character.
    #[error("delimiter '{delimiter}' is not an ASCII character")]
    InvalidDelimiter { delimiter: char },

    // === Parsing Errors ===
    /// Failed to parse delimited text with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Delimited file has no content.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no sheet or no header row.
    #[error("workbook has no data: {path}")]
    EmptyWorkbook { path: PathBuf },

    // === Schema Errors ===
    /// None of the names configured for an attribute is a column of the table.
    #[error("column for '{attribute}' not found (looked for: {candidates})")]
    MissingColumn {
        attribute: String,
        candidates: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
