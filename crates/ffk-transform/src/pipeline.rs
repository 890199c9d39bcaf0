//! End-to-end pipelines for both variants.
//!
//! Both take normalized rows and return one aggregation table per category,
//! in category priority order, plus the row counts seen at each stage.

use std::time::Instant;

use tracing::{debug, info_span};

use ffk_ingest::{NormalizedBookings, NormalizedCalendar};
use ffk_model::{BookingConfig, CalendarConfig, CategoryReport, CategoryTable, Result};

use crate::aggregate::{calendar_room_pivot, room_totals};
use crate::duration::derive_durations;
use crate::expand::RoomExpander;
use crate::filter::{apply_filter, booking_predicates, calendar_predicates};
use crate::partition::partition;

/// Row counts per pipeline stage for one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageCounts {
    /// Rows read from the file, blank rows included.
    pub loaded: usize,
    /// Booking durations replaced by zero.
    pub coerced_durations: usize,
    pub blank_rows: usize,
    /// Calendar entries dropped for unparseable or non-positive durations.
    pub invalid_durations: usize,
    /// Rows that passed the filter.
    pub filtered: usize,
    /// Room rows after expansion; equals `filtered` for bookings.
    pub expanded: usize,
    /// Group rows over all category tables, totals excluded.
    pub aggregated_rows: usize,
}

impl StageCounts {
    /// Rows removed before filtering.
    pub fn dropped(&self) -> usize {
        self.blank_rows + self.invalid_durations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub report: CategoryReport,
    pub counts: StageCounts,
}

pub fn run_bookings(normalized: NormalizedBookings, config: &BookingConfig) -> Result<PipelineOutput> {
    let span = info_span!("bookings_pipeline");
    let _guard = span.enter();
    let start = Instant::now();

    let mut counts = StageCounts {
        loaded: normalized.rows.len() + normalized.blank_rows,
        coerced_durations: normalized.coerced_durations,
        blank_rows: normalized.blank_rows,
        ..StageCounts::default()
    };
    let filtered = apply_filter(normalized.rows, &booking_predicates(config));
    counts.filtered = filtered.kept.len();
    counts.expanded = counts.filtered;

    let partition = partition(filtered.kept, &config.categories);
    let sections = partition
        .subsets
        .into_iter()
        .map(|subset| -> Result<CategoryTable> {
            Ok(CategoryTable {
                table: room_totals(&subset.rows)?,
                label: subset.label,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let report = CategoryReport::new(sections);
    counts.aggregated_rows = report.row_count();

    debug!(
        loaded = counts.loaded,
        filtered = counts.filtered,
        aggregated_rows = counts.aggregated_rows,
        duration_ms = start.elapsed().as_millis(),
        "bookings pipeline complete"
    );
    Ok(PipelineOutput { report, counts })
}

pub fn run_calendar(normalized: NormalizedCalendar, config: &CalendarConfig) -> Result<PipelineOutput> {
    let span = info_span!("calendar_pipeline");
    let _guard = span.enter();
    let start = Instant::now();

    let mut counts = StageCounts {
        loaded: normalized.entries.len() + normalized.blank_rows,
        blank_rows: normalized.blank_rows,
        ..StageCounts::default()
    };
    let derived = derive_durations(normalized.entries, &config.datetime_format);
    counts.invalid_durations = derived.invalid;

    let filtered = apply_filter(derived.entries, &calendar_predicates(config));
    counts.filtered = filtered.kept.len();

    let rooms: Vec<_> = RoomExpander::new(&filtered.kept, config).iter().collect();
    counts.expanded = rooms.len();

    let partition = partition(rooms, &config.categories);
    let sections = partition
        .subsets
        .into_iter()
        .map(|subset| -> Result<CategoryTable> {
            Ok(CategoryTable {
                table: calendar_room_pivot(&subset.rows, config)?,
                label: subset.label,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let report = CategoryReport::new(sections);
    counts.aggregated_rows = report.row_count();

    debug!(
        loaded = counts.loaded,
        dropped = counts.dropped(),
        filtered = counts.filtered,
        expanded = counts.expanded,
        aggregated_rows = counts.aggregated_rows,
        duration_ms = start.elapsed().as_millis(),
        "calendar pipeline complete"
    );
    Ok(PipelineOutput { report, counts })
}
