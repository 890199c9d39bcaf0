//! Room expansion for calendar entries.

use ffk_model::{CalendarConfig, RoomBooking, TimedEntry};

/// Splits each entry's location into rooms and yields one [`RoomBooking`] per
/// target room, carrying the entry's full duration.
///
/// The expander borrows its input; every call to [`RoomExpander::iter`]
/// starts a fresh pass.
#[derive(Debug, Clone, Copy)]
pub struct RoomExpander<'a> {
    entries: &'a [TimedEntry],
    config: &'a CalendarConfig,
}

impl<'a> RoomExpander<'a> {
    pub fn new(entries: &'a [TimedEntry], config: &'a CalendarConfig) -> Self {
        Self { entries, config }
    }

    pub fn iter(&self) -> impl Iterator<Item = RoomBooking> + Clone + use<'a> {
        let config = self.config;
        self.entries.iter().flat_map(move |entry| {
            entry
                .location
                .split(config.location_separator)
                .map(str::trim)
                .filter(move |room| config.is_target_room(room))
                .map(move |room| RoomBooking {
                    subject: entry.subject.clone(),
                    calendar: entry.calendar.clone(),
                    room: room.to_string(),
                    hours: entry.hours,
                })
        })
    }
}
