use std::path::PathBuf;

use ffk_model::Variant;
use ffk_report::WrittenOutputs;
use ffk_transform::StageCounts;

#[derive(Debug)]
pub struct RunResult {
    pub variant: Variant,
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Processed,
    /// Configured file not found; skipped with a warning.
    Missing,
    Failed,
}

#[derive(Debug)]
pub struct FileSummary {
    pub year: String,
    pub source: String,
    pub status: FileStatus,
    pub counts: StageCounts,
    /// `None` for dry runs and for files that were not processed.
    pub outputs: Option<WrittenOutputs>,
}
