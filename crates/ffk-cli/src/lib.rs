//! CLI library components for the FFK usage analysis.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
