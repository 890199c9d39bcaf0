//! Duration derivation for calendar entries.

use chrono::NaiveDateTime;
use tracing::{trace, warn};

use ffk_model::{CalendarEntry, TimedEntry};

/// Entries with a positive duration plus the number dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedDurations {
    pub entries: Vec<TimedEntry>,
    pub invalid: usize,
}

/// Parses `<date> <time>` with a `chrono` format such as `%d.%m.%Y %H:%M`.
pub fn parse_timestamp(date: &str, time: &str, format: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&combined, format).ok()
}

/// Elapsed hours from start to end. Negative when end precedes start.
pub fn elapsed_hours(entry: &CalendarEntry, format: &str) -> Option<f64> {
    let start = parse_timestamp(&entry.start_date, &entry.start_time, format)?;
    let end = parse_timestamp(&entry.end_date, &entry.end_time, format)?;
    Some((end - start).num_seconds() as f64 / 3600.0)
}

/// Derives durations, dropping entries whose timestamps fail to parse or
/// whose duration is not strictly positive.
pub fn derive_durations(entries: Vec<CalendarEntry>, format: &str) -> DerivedDurations {
    let mut derived = DerivedDurations {
        entries: Vec::with_capacity(entries.len()),
        invalid: 0,
    };
    for entry in entries {
        match elapsed_hours(&entry, format) {
            Some(hours) if hours > 0.0 => derived.entries.push(TimedEntry {
                subject: entry.subject,
                calendar: entry.calendar,
                location: entry.location,
                hours,
            }),
            other => {
                trace!(subject = %entry.subject, hours = ?other, "invalid duration");
                derived.invalid += 1;
            }
        }
    }
    if derived.invalid > 0 {
        warn!(
            invalid = derived.invalid,
            "entries with invalid duration removed"
        );
    }
    derived
}
