//! Ingestion of booking and calendar exports.
//!
//! This crate loads the configured source files into a [`RawTable`] and maps
//! them onto the canonical rows of `ffk-model`.
//!
//! # Features
//!
//! - **Delimited text**: read through Polars after decoding the configured encoding
//! - **Workbooks**: first sheet of `.xlsx`/`.xls`/`.xlsm`/`.xlsb`/`.ods` files via calamine
//! - **Input resolution**: configured `(file, year, encoding)` entries checked on disk
//! - **Record normalization**: column aliases, trimming and duration coercion
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ffk_ingest::{LoadOptions, load_table, normalize_bookings};
//! use ffk_model::BookingConfig;
//!
//! let config = BookingConfig::default();
//! let table = load_table(Path::new("VA_Buchungen_evis_2025.xlsx"), &LoadOptions::default())?;
//! let normalized = normalize_bookings(&table, &config.columns)?;
//! ```

mod csv;
mod discovery;
mod encoding;
mod error;
mod loader;
mod normalize;
mod polars_utils;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{parse_delimited, read_delimited};
pub use encoding::{decode_bytes, resolve_encoding};
pub use loader::{LoadOptions, SourceFormat, load_table};
pub use table::RawTable;
pub use workbook::read_workbook;

// === Input Resolution ===
pub use discovery::{ResolvedInput, resolve_inputs};

// === Normalization ===
pub use normalize::{
    NormalizedBookings, NormalizedCalendar, coerce_duration, normalize_bookings,
    normalize_calendar, resolve_column,
};
