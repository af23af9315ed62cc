use std::path::PathBuf;
use std::process::ExitCode;

use crate::board::{PanelTitle, ResultBoard};
use crate::cli::{Cli, OutputFormat};
use crate::core::{DateFilter, FilenameMatch, file_stem};
use crate::error::AppError;
use crate::output::{
    RenderOptions, output_panels_json, print_clipboard, print_panels, print_tables,
};
use crate::source::{BatchReport, FileOutcome, find_files, process_batch};
use crate::utils::parse_date;

/// How processed files become panels
#[derive(Debug, Clone, Default)]
pub(crate) struct BoardOptions<'a> {
    pub(crate) filter: DateFilter,
    pub(crate) include_unmatched: bool,
    pub(crate) exclude_sensors: &'a [String],
    pub(crate) expand: bool,
}

/// Board built from a batch, plus the files left off it
#[derive(Debug, Default)]
pub(crate) struct BoardBuild {
    pub(crate) board: ResultBoard,
    /// Files whose name did not match the convention
    pub(crate) unmatched: Vec<PathBuf>,
}

fn parse_filter(cli: &Cli) -> Result<DateFilter, AppError> {
    let since = cli.since.as_deref().map(parse_date).transpose()?;
    let until = cli.until.as_deref().map(parse_date).transpose()?;
    Ok(DateFilter::new(since, until))
}

/// Turn batch outcomes into a result board (consumes the report)
pub(crate) fn build_board(report: BatchReport, opts: &BoardOptions<'_>) -> BoardBuild {
    let mut board = ResultBoard::new();
    let mut unmatched = Vec::new();

    for outcome in report.outcomes {
        let processed = match outcome {
            FileOutcome::Processed(processed) => processed,
            FileOutcome::Failed { path, error } => {
                eprintln!("Failed to process {}: {error}", path.display());
                continue;
            }
        };

        let averages = opts.filter.apply(processed.averages);
        let title = match processed.metadata {
            FilenameMatch::Matched(meta) => PanelTitle::Sensor(meta),
            FilenameMatch::NoMatch if opts.include_unmatched => PanelTitle::File(processed.stem),
            FilenameMatch::NoMatch => {
                tracing::warn!(
                    file = %processed.path.display(),
                    "file name does not match MOCREO_ST4_<sensor>_(<date>, <date>)_record, skipping"
                );
                unmatched.push(processed.path);
                continue;
            }
        };
        board = board.add(processed.path, title, averages);
    }

    board = opts
        .exclude_sensors
        .iter()
        .fold(board, |board, sensor| board.remove_sensor(sensor));
    if opts.expand {
        board = board.toggle_expansion();
    }

    BoardBuild { board, unmatched }
}

fn print_unmatched(unmatched: &[PathBuf]) {
    if unmatched.is_empty() {
        return;
    }
    let names: Vec<String> = unmatched.iter().map(|p| file_stem(p)).collect();
    eprintln!(
        "Skipped {} file(s) with unrecognized names: {}",
        unmatched.len(),
        names.join(", ")
    );
}

pub(crate) fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let filter = parse_filter(cli)?;

    let files = find_files(&cli.inputs);
    if files.is_empty() {
        return Err(AppError::NoInputs);
    }
    tracing::debug!(files = files.len(), "processing batch");

    let report = process_batch(&files);
    let failed = report.failed_count();
    tracing::debug!(elapsed_ms = report.elapsed_ms, failed, "batch finished");

    let build = build_board(
        report,
        &BoardOptions {
            filter,
            include_unmatched: cli.include_unmatched,
            exclude_sensors: &cli.exclude_sensor,
            expand: cli.expand,
        },
    );
    print_unmatched(&build.unmatched);

    let board = build.board;
    tracing::debug!(
        panels = board.len(),
        expanded = board.is_expanded(),
        "board ready"
    );
    let format = cli.output_format();
    let opts = RenderOptions {
        order: cli.order,
        use_color: cli.use_color() && format != OutputFormat::Copy,
        max_days: cli.compact.then(|| board.panel_height()),
    };

    if format == OutputFormat::Json {
        println!("{}", output_panels_json(&board, &opts)?);
    } else if board.is_empty() {
        eprintln!("No results to display.");
    } else {
        match format {
            OutputFormat::Text => print_panels(&board, &opts),
            OutputFormat::Copy => print_clipboard(&board),
            OutputFormat::Table => print_tables(&board, &opts),
            OutputFormat::Json => {}
        }
    }

    if failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
