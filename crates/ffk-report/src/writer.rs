//! Report files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use ffk_model::CategoryReport;

use crate::context::ReportContext;
use crate::csv_output::render_csv;
use crate::markdown::render_markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub markdown: PathBuf,
    pub csv: PathBuf,
}

/// `<dir>/<stem>_<year>.md` and `<dir>/<stem>_<year>.csv`.
pub fn output_paths(output_dir: &Path, stem: &str, year: &str) -> WrittenOutputs {
    WrittenOutputs {
        markdown: output_dir.join(format!("{stem}_{year}.md")),
        csv: output_dir.join(format!("{stem}_{year}.csv")),
    }
}

/// Renders both file formats, then writes them, creating `output_dir` when needed.
pub fn write_report(
    output_dir: &Path,
    stem: &str,
    ctx: &ReportContext<'_>,
    report: &CategoryReport,
) -> Result<WrittenOutputs> {
    let markdown = render_markdown(ctx, report);
    let csv = render_csv(report)?;
    let paths = output_paths(output_dir, stem, ctx.year);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    fs::write(&paths.markdown, markdown)
        .with_context(|| format!("write {}", paths.markdown.display()))?;
    info!(path = %paths.markdown.display(), "markdown written");
    fs::write(&paths.csv, csv).with_context(|| format!("write {}", paths.csv.display()))?;
    info!(path = %paths.csv.display(), "csv written");
    Ok(paths)
}
