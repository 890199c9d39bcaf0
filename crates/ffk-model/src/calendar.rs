//! Canonical rows of the calendar export.
//!
//! A calendar row moves through three shapes: [`CalendarEntry`] straight from the
//! normalizer, [`TimedEntry`] once its duration has been derived, and
//! [`RoomBooking`] after the location field was expanded into single rooms.

use serde::{Deserialize, Serialize};

use crate::category::Categorized;

/// Calendar row with trimmed string fields, as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub subject: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub calendar: String,
    pub location: String,
}

impl CalendarEntry {
    /// Rows without subject or start date carry no booking.
    pub fn is_blank(&self) -> bool {
        self.subject.is_empty() || self.start_date.is_empty()
    }
}

/// Calendar row with a derived, strictly positive duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEntry {
    pub subject: String,
    pub calendar: String,
    pub location: String,
    pub hours: f64,
}

/// One occupied room of a calendar booking.
///
/// `hours` is the full duration of the originating entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomBooking {
    pub subject: String,
    pub calendar: String,
    pub room: String,
    pub hours: f64,
}

impl Categorized for RoomBooking {
    fn category_field(&self) -> &str {
        &self.subject
    }
}
