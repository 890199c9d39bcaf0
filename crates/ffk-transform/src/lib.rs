//! Booking pipeline stages.
//!
//! - **duration**: elapsed hours from calendar start/end date-time pairs
//! - **filter**: per-variant predicate sets combined by AND
//! - **expand**: one row per occupied target room
//! - **partition**: first-match-wins category assignment
//! - **aggregate**: per-room and per-calendar-per-room duration tables
//! - **pipeline**: both variants wired end to end with stage counts

pub mod aggregate;
pub mod duration;
pub mod expand;
pub mod filter;
pub mod partition;
pub mod pipeline;

pub use aggregate::{calendar_room_pivot, room_totals};
pub use duration::{DerivedDurations, derive_durations, elapsed_hours, parse_timestamp};
pub use expand::RoomExpander;
pub use filter::{
    BookingPredicate, CalendarPredicate, FilterOutcome, Predicate, apply_filter,
    booking_predicates, calendar_predicates,
};
pub use partition::{CategorySubset, Partition, partition};
pub use pipeline::{PipelineOutput, StageCounts, run_bookings, run_calendar};
