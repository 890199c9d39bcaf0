//! Duration aggregation into [`AggregationTable`]s.

use std::collections::BTreeMap;

use tracing::debug;

use ffk_model::{
    AggregationRow, AggregationTable, BookingRow, CalendarConfig, ColumnSpec, Result, RoomBooking,
};

pub const ROOM_COLUMN: &str = "Raum";
pub const DURATION_COLUMN: &str = "Dauer (Std)";
pub const DURATION_CSV_COLUMN: &str = "Dauer_Stunden";
pub const CALENDAR_COLUMN: &str = "Kalender";
pub const ROW_TOTAL_COLUMN: &str = "Gesamt";

/// Sums booking hours per room.
pub fn room_totals(rows: &[BookingRow]) -> Result<AggregationTable> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        *sums.entry(row.room.as_str()).or_insert(0.0) += row.duration_hours;
    }
    let groups = sums
        .into_iter()
        .map(|(room, hours)| AggregationRow::new(room, vec![hours]))
        .collect();
    AggregationTable::from_groups(
        ColumnSpec::new(ROOM_COLUMN),
        vec![ColumnSpec::new(DURATION_COLUMN).with_csv_name(DURATION_CSV_COLUMN)],
        groups,
    )
}

/// Pivots room bookings into one row per calendar label and one column per
/// target room, in configured order, followed by a row-total column.
///
/// Cells with no bookings are `0.0`.
pub fn calendar_room_pivot(rows: &[RoomBooking], config: &CalendarConfig) -> Result<AggregationTable> {
    let width = config.target_rooms.len();
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in rows {
        let Some(column) = config.target_rooms.iter().position(|room| *room == row.room) else {
            debug!(room = %row.room, "room is not a target room");
            continue;
        };
        let label = config.calendar_label(&row.calendar).unwrap_or(row.calendar.as_str());
        groups.entry(label).or_insert_with(|| vec![0.0; width])[column] += row.hours;
    }

    let groups = groups
        .into_iter()
        .map(|(label, mut values)| {
            let row_total = values.iter().sum();
            values.push(row_total);
            AggregationRow::new(label, values)
        })
        .collect();
    let mut columns: Vec<ColumnSpec> = config.target_rooms.iter().map(ColumnSpec::new).collect();
    columns.push(ColumnSpec::new(ROW_TOTAL_COLUMN));
    AggregationTable::from_groups(ColumnSpec::new(CALENDAR_COLUMN), columns, groups)
}

#[cfg(test)]
mod tests {
    use ffk_model::GRAND_TOTAL_LABEL;

    use super::*;

    fn booking(room: &str, hours: f64) -> BookingRow {
        BookingRow {
            status: "Vtg ok".to_string(),
            room: room.to_string(),
            name: "Konzert".to_string(),
            organizer: "Akademie".to_string(),
            duration_hours: hours,
        }
    }

    fn room_booking(calendar: &str, room: &str, hours: f64) -> RoomBooking {
        RoomBooking {
            subject: "Probe".to_string(),
            calendar: calendar.to_string(),
            room: room.to_string(),
            hours,
        }
    }

    #[test]
    fn room_totals_sum_per_room() {
        let table = room_totals(&[
            booking("Kirchensaal", 3.0),
            booking("Entrée", 0.5),
            booking("Kirchensaal", 1.25),
        ])
        .unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.value("Kirchensaal", DURATION_COLUMN), Some(4.25));
        assert_eq!(table.value(GRAND_TOTAL_LABEL, DURATION_COLUMN), Some(4.75));
        assert_eq!(table.value_columns()[0].csv_name, DURATION_CSV_COLUMN);
    }

    #[test]
    fn room_totals_of_nothing_is_empty() {
        let table = room_totals(&[]).unwrap();
        assert!(table.is_empty());
        assert!(table.total().is_none());
    }

    #[test]
    fn pivot_uses_labels_and_fills_zeros() {
        let config = CalendarConfig::default();
        let table = calendar_room_pivot(
            &[
                room_booking("Kirche > Kirchenmusik", "Kirchensaal", 1.5),
                room_booking("Kirche > Kirchenmusik", "Entrée", 1.5),
                room_booking("EAzB > EAzB - Festbuchung", "Georges-Casalis-Saal", 2.0),
            ],
            &config,
        )
        .unwrap();
        let labels: Vec<&str> = table.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["EAzB", "Kirchenmusik"]);
        assert_eq!(
            table.rows()[1].values,
            vec![1.5, 0.0, 1.5, 3.0]
        );
        assert_eq!(table.value(GRAND_TOTAL_LABEL, ROW_TOTAL_COLUMN), Some(5.0));
        assert_eq!(table.value(GRAND_TOTAL_LABEL, "Georges-Casalis-Saal"), Some(2.0));
        let headers: Vec<&str> = table.value_columns().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            headers,
            vec!["Kirchensaal", "Georges-Casalis-Saal", "Entrée", "Gesamt"]
        );
    }
}
