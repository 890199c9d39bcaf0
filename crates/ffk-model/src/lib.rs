//! Data model for the FFK usage analysis.
//!
//! - **booking**: canonical rows of the booking-database export
//! - **calendar**: canonical rows of the calendar export, before and after duration derivation
//! - **category**: priority-ordered category rules
//! - **config**: immutable per-variant analysis configuration
//! - **table**: aggregation tables handed to the renderers

pub mod booking;
pub mod calendar;
pub mod category;
pub mod config;
pub mod error;
pub mod table;
pub mod text;

pub use booking::BookingRow;
pub use calendar::{CalendarEntry, RoomBooking, TimedEntry};
pub use category::{Categorized, CategoryRule, Matcher};
pub use config::{
    AnalysisConfig, BookingColumns, BookingConfig, CalendarAlias, CalendarColumns,
    CalendarConfig, InputSpec, Variant,
};
pub use error::{ModelError, Result};
pub use table::{
    AggregationRow, AggregationTable, CategoryReport, CategoryTable, ColumnSpec,
    GRAND_TOTAL_LABEL,
};
pub use text::{contains_ignore_case, find_keyword};
