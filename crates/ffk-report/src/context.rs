use ffk_model::Variant;

/// Everything a renderer needs besides the tables themselves.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub variant: Variant,
    /// Report title without the year, e.g. `Auswertung Nutzungszeiten FFK`.
    pub title: &'a str,
    pub year: &'a str,
    /// File name of the input, shown in the Markdown `Quelle:` line.
    pub source_name: &'a str,
    /// Filter criteria, one line each.
    pub criteria: &'a [String],
}
