//! Rendered Markdown and CSV output.

use ffk_model::{
    AggregationRow, AggregationTable, CategoryReport, CategoryTable, ColumnSpec, Variant,
};
use ffk_report::{ReportContext, output_paths, render_csv, render_markdown, write_report};

fn room_table(rows: Vec<AggregationRow>) -> AggregationTable {
    AggregationTable::from_groups(
        ColumnSpec::new("Raum"),
        vec![ColumnSpec::new("Dauer (Std)").with_csv_name("Dauer_Stunden")],
        rows,
    )
    .unwrap()
}

fn booking_report() -> CategoryReport {
    CategoryReport::new(vec![
        CategoryTable {
            label: "Akademie".to_string(),
            table: room_table(vec![
                AggregationRow::new("Kirchensaal", vec![3.0]),
                AggregationRow::new("Entrée", vec![1.25]),
            ]),
        },
        CategoryTable {
            label: "Externe".to_string(),
            table: room_table(Vec::new()),
        },
    ])
}

fn context(criteria: &[String]) -> ReportContext<'_> {
    ReportContext {
        variant: Variant::Bookings,
        title: "Auswertung Nutzungszeiten FFK",
        year: "2025",
        source_name: "buchungen.xlsx",
        criteria,
    }
}

#[test]
fn markdown_lists_criteria_and_bold_totals() {
    let criteria = vec!["Buchungsstatus = \"Vtg ok\"".to_string()];
    let markdown = render_markdown(&context(&criteria), &booking_report());

    insta::assert_snapshot!(markdown.trim_end(), @r#"
    # Auswertung Nutzungszeiten FFK 2025

    Quelle: `buchungen.xlsx`

    ## Filterkriterien

    - Buchungsstatus = "Vtg ok"

    ## Akademie

    | Raum | Dauer (Std) |
    |:-----|------------:|
    | Entrée | 1.25 |
    | Kirchensaal | 3.00 |
    | **GESAMT** | **4.25** |

    ## Externe

    | Raum | Dauer (Std) |
    |:-----|------------:|
    "#);
}

#[test]
fn csv_combines_categories_with_bom() {
    let bytes = render_csv(&booking_report()).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Kategorie,Raum,Dauer_Stunden",
            "Akademie,Entrée,1.25",
            "Akademie,Kirchensaal,3.00",
            "Akademie,GESAMT,4.25",
        ]
    );
}

#[test]
fn calendar_csv_has_one_column_per_room() {
    let columns: Vec<ColumnSpec> = ["Kirchensaal", "Georges-Casalis-Saal", "Entrée", "Gesamt"]
        .into_iter()
        .map(ColumnSpec::new)
        .collect();
    let table = AggregationTable::from_groups(
        ColumnSpec::new("Kalender"),
        columns,
        vec![AggregationRow::new("Kirchenmusik", vec![1.5, 0.0, 1.5, 3.0])],
    )
    .unwrap();
    let report = CategoryReport::new(vec![CategoryTable {
        label: "Orgelprobe".to_string(),
        table,
    }]);

    let bytes = render_csv(&report).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Kategorie,Kalender,Kirchensaal,Georges-Casalis-Saal,Entrée,Gesamt"
    );
    assert_eq!(lines[1], "Orgelprobe,Kirchenmusik,1.50,0.00,1.50,3.00");
    assert_eq!(lines[2], "Orgelprobe,GESAMT,1.50,0.00,1.50,3.00");
}

#[test]
fn rewriting_unchanged_report_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let criteria = vec!["Räume: Kirchensaal".to_string()];
    let ctx = context(&criteria);
    let report = booking_report();

    let written = write_report(&out, "nutzungszeiten", &ctx, &report).unwrap();
    assert_eq!(written, output_paths(&out, "nutzungszeiten", "2025"));
    assert!(written.markdown.ends_with("nutzungszeiten_2025.md"));
    let first_csv = std::fs::read(&written.csv).unwrap();
    let first_md = std::fs::read(&written.markdown).unwrap();

    write_report(&out, "nutzungszeiten", &ctx, &report).unwrap();
    assert_eq!(std::fs::read(&written.csv).unwrap(), first_csv);
    assert_eq!(std::fs::read(&written.markdown).unwrap(), first_md);
}
