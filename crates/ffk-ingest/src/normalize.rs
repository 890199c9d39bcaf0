//! Record normalization onto canonical rows.
//!
//! Column names are resolved once per table through the configured aliases,
//! before any filtering. String fields are trimmed by the loaders; the booking
//! duration is coerced here.

use tracing::{debug, warn};

use ffk_model::{BookingColumns, BookingRow, CalendarColumns, CalendarEntry};

use crate::error::{IngestError, Result};
use crate::polars_utils::parse_f64;
use crate::table::RawTable;

/// Booking rows plus the number of durations replaced by `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBookings {
    pub rows: Vec<BookingRow>,
    pub coerced_durations: usize,
    /// Rows skipped at load because every cell was blank.
    pub blank_rows: usize,
}

/// Non-blank calendar rows plus the number of blank rows removed, including
/// rows already skipped at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCalendar {
    pub entries: Vec<CalendarEntry>,
    pub blank_rows: usize,
}

/// Finds the column for `attribute` among its `aliases`.
///
/// Aliases are tried in order with an exact match first; if none matches
/// exactly, the first case-insensitive match wins.
pub fn resolve_column(table: &RawTable, attribute: &str, aliases: &[String]) -> Result<usize> {
    let exact = aliases
        .iter()
        .find_map(|alias| table.headers.iter().position(|header| header == alias));
    let index = exact.or_else(|| {
        aliases.iter().find_map(|alias| {
            table
                .headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(alias))
        })
    });
    match index {
        Some(index) => {
            debug!(attribute, column = %table.headers[index], "resolved column");
            Ok(index)
        }
        None => Err(IngestError::MissingColumn {
            attribute: attribute.to_string(),
            candidates: aliases.join(", "),
        }),
    }
}

/// Parses a booking duration in hours.
///
/// Accepts a decimal comma when the value has no decimal point. Returns `None`
/// for blank, unparseable, negative or non-finite values.
pub fn coerce_duration(raw: &str) -> Option<f64> {
    let value = parse_f64(raw).or_else(|| {
        let trimmed = raw.trim();
        if trimmed.contains(',') && !trimmed.contains('.') {
            parse_f64(&trimmed.replace(',', "."))
        } else {
            None
        }
    })?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Maps a booking export onto [`BookingRow`]s.
///
/// Invalid durations become `0.0` and are counted; the row is kept.
pub fn normalize_bookings(table: &RawTable, columns: &BookingColumns) -> Result<NormalizedBookings> {
    let status = resolve_column(table, "status", &columns.status)?;
    let room = resolve_column(table, "room", &columns.room)?;
    let name = resolve_column(table, "name", &columns.name)?;
    let organizer = resolve_column(table, "organizer", &columns.organizer)?;
    let duration = resolve_column(table, "duration", &columns.duration)?;

    let mut coerced_durations = 0usize;
    let rows = (0..table.len())
        .map(|idx| {
            let duration_hours = coerce_duration(table.cell(idx, duration)).unwrap_or_else(|| {
                coerced_durations += 1;
                0.0
            });
            BookingRow {
                status: table.cell(idx, status).to_string(),
                room: table.cell(idx, room).to_string(),
                name: table.cell(idx, name).to_string(),
                organizer: table.cell(idx, organizer).to_string(),
                duration_hours,
            }
        })
        .collect();

    if coerced_durations > 0 {
        warn!(
            coerced_durations,
            "booking durations could not be parsed and were set to 0"
        );
    }
    if table.blank_rows > 0 {
        debug!(blank_rows = table.blank_rows, "blank booking rows removed");
    }
    Ok(NormalizedBookings {
        rows,
        coerced_durations,
        blank_rows: table.blank_rows,
    })
}

/// Maps a calendar export onto [`CalendarEntry`]s, dropping blank rows.
pub fn normalize_calendar(
    table: &RawTable,
    columns: &CalendarColumns,
) -> Result<NormalizedCalendar> {
    let subject = resolve_column(table, "subject", &columns.subject)?;
    let start_date = resolve_column(table, "start_date", &columns.start_date)?;
    let start_time = resolve_column(table, "start_time", &columns.start_time)?;
    let end_date = resolve_column(table, "end_date", &columns.end_date)?;
    let end_time = resolve_column(table, "end_time", &columns.end_time)?;
    let calendar = resolve_column(table, "calendar", &columns.calendar)?;
    let location = resolve_column(table, "location", &columns.location)?;

    let mut entries = Vec::with_capacity(table.len());
    let mut blank_rows = table.blank_rows;
    for idx in 0..table.len() {
        let entry = CalendarEntry {
            subject: table.cell(idx, subject).to_string(),
            start_date: table.cell(idx, start_date).to_string(),
            start_time: table.cell(idx, start_time).to_string(),
            end_date: table.cell(idx, end_date).to_string(),
            end_time: table.cell(idx, end_time).to_string(),
            calendar: table.cell(idx, calendar).to_string(),
            location: table.cell(idx, location).to_string(),
        };
        if entry.is_blank() {
            blank_rows += 1;
        } else {
            entries.push(entry);
        }
    }
    if blank_rows > 0 {
        debug!(blank_rows, "blank calendar rows removed");
    }
    Ok(NormalizedCalendar {
        entries,
        blank_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::from_raw(
            headers.iter().copied(),
            rows.iter()
                .map(|row| row.iter().map(|value| (*value).to_string()).collect::<Vec<String>>()),
        )
    }

    #[test]
    fn coerce_duration_handles_invalid_values() {
        assert_eq!(coerce_duration("3"), Some(3.0));
        assert_eq!(coerce_duration(" 1.5 "), Some(1.5));
        assert_eq!(coerce_duration("1,5"), Some(1.5));
        assert_eq!(coerce_duration(""), None);
        assert_eq!(coerce_duration("drei"), None);
        assert_eq!(coerce_duration("-2"), None);
        assert_eq!(coerce_duration("NaN"), None);
        assert_eq!(coerce_duration("inf"), None);
        assert_eq!(coerce_duration("1,234.5"), None);
    }

    #[test]
    fn resolves_room_alias_of_older_exports() {
        let table = table(
            &["Buchungsstatus", "VA_Raum", "VA_Buchung_Name", "Veranstalter_1", "Dauer"],
            &[&["Vtg ok", "Kirchensaal", "Konzert", "X", "2"]],
        );
        let normalized = normalize_bookings(&table, &BookingColumns::default()).unwrap();
        assert_eq!(normalized.rows[0].room, "Kirchensaal");
    }

    #[test]
    fn prefers_exact_alias_over_case_insensitive_match() {
        let table = table(&["va_raum0", "VA_Raum"], &[&["a", "b"]]);
        let aliases = vec!["VA_Raum0".to_string(), "VA_Raum".to_string()];
        assert_eq!(resolve_column(&table, "room", &aliases).unwrap(), 1);
    }

    #[test]
    fn missing_column_is_structural_error() {
        let table = table(&["Buchungsstatus"], &[&["Vtg ok"]]);
        let error = normalize_bookings(&table, &BookingColumns::default()).unwrap_err();
        assert!(matches!(error, IngestError::MissingColumn { ref attribute, .. } if attribute == "room"));
    }

    #[test]
    fn unparseable_duration_becomes_zero() {
        let table = table(
            &["Buchungsstatus", "VA_Raum0", "VA_Buchung_Name", "Veranstalter_1", "Dauer"],
            &[
                &["Vtg ok", "Kirchensaal", "Konzert", "X", "n/a"],
                &["Vtg ok", "Entrée", "Lesung", "X", "2.5"],
                &["", " ", "", "", ""],
            ],
        );
        let normalized = normalize_bookings(&table, &BookingColumns::default()).unwrap();
        assert_eq!(normalized.rows.len(), 2);
        assert_eq!(normalized.blank_rows, 1);
        assert_eq!(normalized.rows[0].duration_hours, 0.0);
        assert_eq!(normalized.rows[1].duration_hours, 2.5);
        assert_eq!(normalized.coerced_durations, 1);
    }

    #[test]
    fn blank_calendar_rows_are_dropped() {
        let table = table(
            &[
                "Subject",
                "Start Date",
                "Start Time",
                "End Date",
                "End Time",
                "Calendar Name",
                "Wo",
            ],
            &[
                &["Orgelprobe", "01.02.2025", "10:00", "01.02.2025", "11:30", "Kirche > Kirchenmusik", "Kirchensaal"],
                &["", "01.02.2025", "10:00", "01.02.2025", "11:30", "Kirche > Kirchenmusik", "Kirchensaal"],
                &["Konzert", "", "", "", "", "Kirche > Kirchenmusik", ""],
                &["", "", "", "", "", "", ""],
            ],
        );
        let normalized = normalize_calendar(&table, &CalendarColumns::default()).unwrap();
        assert_eq!(normalized.entries.len(), 1);
        assert_eq!(normalized.blank_rows, 3);
        assert_eq!(normalized.entries[0].subject, "Orgelprobe");
    }
}
