//! Row filters.
//!
//! Each variant has a fixed, ordered predicate set; a row is kept only when
//! every predicate accepts it. Rejections are attributed to the first
//! predicate that refuses the row.

use std::collections::BTreeSet;

use tracing::debug;

use ffk_model::{BookingConfig, BookingRow, CalendarConfig, TimedEntry, find_keyword};

/// A single keep/drop rule over rows of type `T`.
pub trait Predicate<T> {
    fn name(&self) -> &'static str;
    fn accepts(&self, row: &T) -> bool;
}

/// Kept rows plus per-predicate rejection counts, in predicate order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<T> {
    pub kept: Vec<T>,
    pub rejected: Vec<(&'static str, usize)>,
}

impl<T> FilterOutcome<T> {
    pub fn rejected_total(&self) -> usize {
        self.rejected.iter().map(|(_, count)| count).sum()
    }
}

pub fn apply_filter<T, P: Predicate<T>>(rows: Vec<T>, predicates: &[P]) -> FilterOutcome<T> {
    let mut rejected: Vec<(&'static str, usize)> =
        predicates.iter().map(|p| (p.name(), 0)).collect();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        match predicates.iter().position(|p| !p.accepts(&row)) {
            Some(idx) => rejected[idx].1 += 1,
            None => kept.push(row),
        }
    }
    for (name, count) in &rejected {
        debug!(predicate = name, rejected = count, "filter applied");
    }
    FilterOutcome { kept, rejected }
}

#[derive(Debug, Clone, Copy)]
pub enum BookingPredicate<'a> {
    /// Status equals the configured value exactly.
    StatusEquals(&'a str),
    RoomNotExcluded(&'a BTreeSet<String>),
    /// Name contains none of the keywords, case-insensitively.
    NameWithoutKeywords(&'a [String]),
}

impl Predicate<BookingRow> for BookingPredicate<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::StatusEquals(_) => "status",
            Self::RoomNotExcluded(_) => "excluded_room",
            Self::NameWithoutKeywords(_) => "name_keyword",
        }
    }

    fn accepts(&self, row: &BookingRow) -> bool {
        match self {
            Self::StatusEquals(status) => row.status == *status,
            Self::RoomNotExcluded(rooms) => !rooms.contains(&row.room),
            Self::NameWithoutKeywords(keywords) => find_keyword(&row.name, keywords).is_none(),
        }
    }
}

pub fn booking_predicates(config: &BookingConfig) -> [BookingPredicate<'_>; 3] {
    [
        BookingPredicate::StatusEquals(&config.required_status),
        BookingPredicate::RoomNotExcluded(&config.excluded_rooms),
        BookingPredicate::NameWithoutKeywords(&config.excluded_name_keywords),
    ]
}

#[derive(Debug, Clone, Copy)]
pub enum CalendarPredicate<'a> {
    /// Calendar name is one of the configured calendars, compared exactly.
    CalendarIncluded(&'a CalendarConfig),
    SubjectWithoutKeywords(&'a [String]),
}

impl Predicate<TimedEntry> for CalendarPredicate<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::CalendarIncluded(_) => "calendar",
            Self::SubjectWithoutKeywords(_) => "subject_keyword",
        }
    }

    fn accepts(&self, row: &TimedEntry) -> bool {
        match self {
            Self::CalendarIncluded(config) => config.calendar_label(&row.calendar).is_some(),
            Self::SubjectWithoutKeywords(keywords) => {
                find_keyword(&row.subject, keywords).is_none()
            }
        }
    }
}

pub fn calendar_predicates(config: &CalendarConfig) -> [CalendarPredicate<'_>; 2] {
    [
        CalendarPredicate::CalendarIncluded(config),
        CalendarPredicate::SubjectWithoutKeywords(&config.excluded_subject_keywords),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: &str, room: &str, name: &str) -> BookingRow {
        BookingRow {
            status: status.to_string(),
            room: room.to_string(),
            name: name.to_string(),
            organizer: "Akademie".to_string(),
            duration_hours: 2.0,
        }
    }

    fn timed(subject: &str, calendar: &str) -> TimedEntry {
        TimedEntry {
            subject: subject.to_string(),
            calendar: calendar.to_string(),
            location: "Kirchensaal".to_string(),
            hours: 1.0,
        }
    }

    #[test]
    fn booking_filter_requires_every_predicate() {
        let mut config = BookingConfig::default();
        config.excluded_rooms.insert("Turmzimmer".to_string());
        config.excluded_name_keywords = vec!["Reinigung".to_string()];
        let outcome = apply_filter(
            vec![
                booking("Vtg ok", "Kirchensaal", "Konzert"),
                booking("vtg ok", "Kirchensaal", "Konzert"),
                booking("Vtg ok", "Turmzimmer", "Konzert"),
                booking("Vtg ok", "Kirchensaal", "Grund-REINIGUNG"),
            ],
            &booking_predicates(&config),
        );
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.kept[0].name, "Konzert");
        assert_eq!(
            outcome.rejected,
            vec![("status", 1), ("excluded_room", 1), ("name_keyword", 1)]
        );
        assert_eq!(outcome.rejected_total(), 3);
    }

    #[test]
    fn calendar_filter_matches_names_exactly() {
        let config = CalendarConfig::default();
        let included = config.included_calendars[0].name.clone();
        let mut keyword_subject = String::from("Vorbereitung ");
        keyword_subject.push_str(&config.excluded_subject_keywords[0].to_uppercase());
        let outcome = apply_filter(
            vec![
                timed("Orgelprobe", &included),
                timed("Orgelprobe", &format!("{included} ")),
                timed(&keyword_subject, &included),
            ],
            &calendar_predicates(&config),
        );
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.rejected, vec![("calendar", 1), ("subject_keyword", 1)]);
    }
}
