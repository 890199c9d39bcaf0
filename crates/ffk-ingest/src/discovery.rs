//! Resolution of configured input files.

use std::path::{Path, PathBuf};

use ffk_model::InputSpec;

/// A configured input joined with the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub spec: InputSpec,
    pub path: PathBuf,
    pub exists: bool,
}

impl ResolvedInput {
    /// File name for report headers, falling back to the full path.
    pub fn source_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| self.path.display().to_string(), str::to_string)
    }
}

/// Resolves each spec against `input_dir` (absolute specs are kept) and checks it exists.
///
/// Order follows `specs`; missing files are returned with `exists == false`
/// so the caller can warn and continue.
pub fn resolve_inputs(input_dir: &Path, specs: &[InputSpec]) -> Vec<ResolvedInput> {
    specs
        .iter()
        .map(|spec| {
            let path = if spec.file.is_absolute() {
                spec.file.clone()
            } else {
                input_dir.join(&spec.file)
            };
            let exists = path.is_file();
            ResolvedInput {
                spec: spec.clone(),
                path,
                exists,
            }
        })
        .collect()
}
