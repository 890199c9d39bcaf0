//! Property tests for aggregation tables.

use proptest::prelude::*;

use ffk_model::{AggregationRow, AggregationTable, ColumnSpec, GRAND_TOTAL_LABEL};

fn room_columns() -> Vec<ColumnSpec> {
    ["Kirchensaal", "Georges-Casalis-Saal", "Entrée", "Gesamt"]
        .into_iter()
        .map(ColumnSpec::new)
        .collect()
}

proptest! {
    #[test]
    fn total_row_equals_column_sums(
        groups in prop::collection::btree_map("[A-Za-z ]{1,12}", prop::collection::vec(0.0f64..500.0, 4), 0..20)
    ) {
        let rows: Vec<AggregationRow> = groups
            .iter()
            .map(|(label, values)| AggregationRow::new(label.clone(), values.clone()))
            .collect();
        let table = AggregationTable::from_groups(ColumnSpec::new("Kalender"), room_columns(), rows)
            .expect("rows have table width");

        if groups.is_empty() {
            prop_assert!(table.total().is_none());
        } else {
            let total = table.total().expect("total row");
            prop_assert_eq!(total.label.as_str(), GRAND_TOTAL_LABEL);
            for (column, sum) in total.values.iter().enumerate() {
                let expected: f64 = table.rows().iter().map(|row| row.values[column]).sum();
                prop_assert!((sum - expected).abs() < 0.01);
            }
        }
        prop_assert_eq!(table.rows().len(), groups.len());
    }

    #[test]
    fn rows_are_sorted_by_label(labels in prop::collection::btree_set("[a-z]{1,8}", 1..10)) {
        let mut shuffled: Vec<String> = labels.iter().cloned().collect();
        shuffled.reverse();
        let rows = shuffled
            .into_iter()
            .map(|label| AggregationRow::new(label, vec![1.0]))
            .collect();
        let table = AggregationTable::from_groups(
            ColumnSpec::new("Raum"),
            vec![ColumnSpec::new("Dauer (Std)")],
            rows,
        )
        .expect("rows have table width");
        let sorted: Vec<&str> = table.rows().iter().map(|row| row.label.as_str()).collect();
        let expected: Vec<&str> = labels.iter().map(String::as_str).collect();
        prop_assert_eq!(sorted, expected);
    }
}
