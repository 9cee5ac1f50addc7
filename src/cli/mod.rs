pub mod output;
pub mod style;

use std::{io::Write, path::PathBuf};

use clap::Parser;

use cadence_core::{ProfileService, WholeLedger};
use cadence_ingest_csv::CsvLedgerReader;

use crate::{
    config::{self, ConfigManager},
    errors::CliError,
    utils::build_info::LONG_VERSION,
};

use self::style::ReportStyle;

/// Classify recurring-payment cadence from a CSV ledger of credits.
#[derive(Debug, Clone, Parser)]
#[command(name = "cadence", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Path to the `date,amount` CSV ledger.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show per-granularity scores and window statistics.
    #[arg(short, long)]
    pub debug: bool,

    /// First day of week-aligned windows (sunday or monday).
    #[arg(long, value_name = "DAY")]
    pub week_start: Option<String>,

    /// chrono format of the CSV date column.
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Emit the full profile as JSON.
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,

    /// Configuration file to read instead of the default location.
    #[arg(long, value_name = "PATH", env = "CADENCE_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn run_cli() -> Result<(), CliError> {
    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)
}

/// Loads preferences and the ledger, profiles it, and writes the report to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let manager = match &args.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => config::default_manager(),
    };
    let cfg = manager.load()?;
    let options = config::classifier_options(&cfg, args.week_start.as_deref(), args.debug)?;

    let input = cfg.resolve_input(args.file.clone());
    let date_format = args
        .date_format
        .clone()
        .unwrap_or_else(|| cfg.date_format.clone());
    tracing::debug!(input = %input.display(), %date_format, ?options, "profiling ledger");

    let ledger = CsvLedgerReader::new()
        .with_date_format(date_format)
        .read_path(&input)?;
    let profiles = ProfileService::profile(&ledger, &WholeLedger, &options)?;

    if args.json {
        writeln!(out, "{}", output::render_json(&profiles, &options)?)?;
    } else {
        let style = ReportStyle::detect(&cfg, args.no_color);
        write!(
            out,
            "{}",
            output::render_report(&profiles, &style, options.diagnostics)
        )?;
    }
    out.flush()?;
    Ok(())
}
