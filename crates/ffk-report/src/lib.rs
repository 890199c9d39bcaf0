//! Rendering of finished category reports.
//!
//! Renderers are pure functions from a [`CategoryReport`](ffk_model::CategoryReport)
//! to text or bytes; [`write_report`] puts the Markdown and CSV renditions on disk.

pub mod console;
pub mod context;
pub mod csv_output;
pub mod markdown;
pub mod writer;

pub use console::render_console;
pub use context::ReportContext;
pub use csv_output::render_csv;
pub use markdown::render_markdown;
pub use writer::{WrittenOutputs, output_paths, write_report};
