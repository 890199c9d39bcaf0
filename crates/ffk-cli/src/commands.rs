use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info, info_span, warn};

use ffk_ingest::{
    LoadOptions, ResolvedInput, load_table, normalize_bookings, normalize_calendar,
    resolve_inputs,
};
use ffk_model::{AnalysisConfig, BookingConfig, CalendarConfig, InputSpec, Variant};
use ffk_report::{ReportContext, WrittenOutputs, render_console, write_report};
use ffk_transform::{PipelineOutput, StageCounts, run_bookings, run_calendar};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::{FileStatus, FileSummary, RunResult};

/// Built-in configuration, or the JSON file at `path` when given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        let config = AnalysisConfig::default();
        config.validate().context("validate built-in configuration")?;
        return Ok(config);
    };
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = AnalysisConfig::from_json_str(&json)
        .with_context(|| format!("load configuration {}", path.display()))?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

pub fn run_criteria(config: &AnalysisConfig) {
    for (title, criteria) in [
        (&config.bookings.title, config.bookings.criteria()),
        (&config.calendar.title, config.calendar.criteria()),
    ] {
        let mut table = Table::new();
        table.set_header(vec![title.as_str()]);
        apply_table_style(&mut table);
        for line in criteria {
            table.add_row(vec![line]);
        }
        println!("{table}");
    }
}

pub fn run_booking_analysis(config: &BookingConfig, args: &RunArgs) -> Result<RunResult> {
    let inputs = select_inputs(&config.inputs, args);
    let criteria = config.criteria();
    Ok(process_inputs(Variant::Bookings, &inputs, args, |input| {
        let options = LoadOptions::new(
            config.csv_delimiter,
            input.spec.encoding.as_deref().unwrap_or("utf-8"),
        );
        let table = load_table(&input.path, &options)?;
        let normalized = normalize_bookings(&table, &config.columns)?;
        let output = run_bookings(normalized, config)?;
        Ok(Rendering {
            title: &config.title,
            output_stem: &config.output_stem,
            criteria: &criteria,
            output,
        })
    }))
}

pub fn run_calendar_analysis(config: &CalendarConfig, args: &RunArgs) -> Result<RunResult> {
    let inputs = select_inputs(&config.inputs, args);
    let criteria = config.criteria();
    Ok(process_inputs(Variant::Calendar, &inputs, args, |input| {
        let options = LoadOptions::new(
            config.csv_delimiter,
            input
                .spec
                .encoding
                .as_deref()
                .unwrap_or(config.default_encoding.as_str()),
        );
        let table = load_table(&input.path, &options)?;
        let normalized = normalize_calendar(&table, &config.columns)?;
        let output = run_calendar(normalized, config)?;
        Ok(Rendering {
            title: &config.title,
            output_stem: &config.output_stem,
            criteria: &criteria,
            output,
        })
    }))
}

/// A finished pipeline run plus what the renderers need from the configuration.
struct Rendering<'a> {
    title: &'a str,
    output_stem: &'a str,
    criteria: &'a [String],
    output: PipelineOutput,
}

fn select_inputs(configured: &[InputSpec], args: &RunArgs) -> Vec<InputSpec> {
    if args.inputs.is_empty() {
        configured.to_vec()
    } else {
        args.inputs.clone()
    }
}

/// Runs `analyse` for each input in order. Missing files are skipped; a
/// failing file is recorded and the remaining files still run.
fn process_inputs<'a, F>(
    variant: Variant,
    inputs: &[InputSpec],
    args: &RunArgs,
    mut analyse: F,
) -> RunResult
where
    F: FnMut(&ResolvedInput) -> Result<Rendering<'a>>,
{
    let mut result = RunResult {
        variant,
        output_dir: args.output_dir.clone(),
        files: Vec::new(),
        errors: Vec::new(),
        has_errors: false,
    };

    for input in resolve_inputs(&args.input_dir, inputs) {
        let source = input.source_name();
        let span = info_span!("file", %variant, year = %input.spec.year, source = %source);
        let _guard = span.enter();
        let mut summary = FileSummary {
            year: input.spec.year.clone(),
            source: source.clone(),
            status: FileStatus::Processed,
            counts: StageCounts::default(),
            outputs: None,
        };

        if !input.exists {
            warn!(path = %input.path.display(), "input file not found, skipping");
            summary.status = FileStatus::Missing;
            result.files.push(summary);
            continue;
        }

        info!(path = %input.path.display(), "loading input");
        match analyse(&input).and_then(|rendering| finish(&input, &source, variant, args, rendering))
        {
            Ok((counts, outputs)) => {
                summary.counts = counts;
                summary.outputs = outputs;
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "input failed");
                result.errors.push(format!("{source}: {err:#}"));
                result.has_errors = true;
                summary.status = FileStatus::Failed;
            }
        }
        result.files.push(summary);
    }
    result
}

/// Prints the console report and, unless this is a dry run, writes the report files.
fn finish(
    input: &ResolvedInput,
    source: &str,
    variant: Variant,
    args: &RunArgs,
    rendering: Rendering<'_>,
) -> Result<(StageCounts, Option<WrittenOutputs>)> {
    let Rendering {
        title,
        output_stem,
        criteria,
        output,
    } = rendering;
    let counts = output.counts;
    info!(
        loaded = counts.loaded,
        dropped = counts.dropped(),
        filtered = counts.filtered,
        aggregated_rows = counts.aggregated_rows,
        "pipeline complete"
    );

    let ctx = ReportContext {
        variant,
        title,
        year: &input.spec.year,
        source_name: source,
        criteria,
    };
    print!("{}", render_console(&ctx, &output.report));

    if args.dry_run {
        info!("dry run, no files written");
        return Ok((counts, None));
    }
    let outputs = write_report(&args.output_dir, output_stem, &ctx, &output.report)
        .with_context(|| format!("write reports for {source}"))?;
    Ok((counts, Some(outputs)))
}
