//! Canonical rows of the booking-database export.

use serde::{Deserialize, Serialize};

use crate::category::Categorized;

/// One booking after normalization.
///
/// `duration_hours` is always finite and non-negative; the normalizer coerces
/// anything else to `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    pub status: String,
    pub room: String,
    pub name: String,
    pub organizer: String,
    pub duration_hours: f64,
}

impl Categorized for BookingRow {
    fn category_field(&self) -> &str {
        &self.organizer
    }
}
