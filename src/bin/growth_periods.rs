//! Label germination and harvest periods in an NDVI CSV file.

use anyhow::{Context, Result};
use clap::Parser;
use ndvi_phenology::detection::{
    detect_growth_periods, GrowthPeriodConfig, PeriodLabel, DEFAULT_DELTA_THRESHOLD,
    DEFAULT_INDEX_THRESHOLD, DEFAULT_SMOOTHING_WINDOW,
};
use ndvi_phenology::io::{read_series_csv, write_annotated_csv, CsvOptions};
use ndvi_phenology::logging::{init_logging, LoggingConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "growth-periods",
    about = "Label germination and harvest periods in a daily vegetation-index series"
)]
struct Args {
    /// Input CSV with a header row.
    #[arg(long)]
    input: PathBuf,

    /// Output CSV; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Smoothed index must be below this to be labeled.
    #[arg(long, default_value_t = DEFAULT_INDEX_THRESHOLD)]
    index_threshold: f64,

    /// Maximum day-over-day change of the smoothed index.
    #[arg(long, default_value_t = DEFAULT_DELTA_THRESHOLD)]
    delta_threshold: f64,

    /// Moving-average window.
    #[arg(long, default_value_t = DEFAULT_SMOOTHING_WINDOW)]
    window: usize,

    #[arg(long, default_value = "date")]
    date_column: String,

    #[arg(long, default_value = "ndvi")]
    value_column: String,

    #[arg(long, default_value = "%Y-%m-%d")]
    date_format: String,

    /// Report contiguous periods at least this many observations long.
    #[arg(long)]
    min_run: Option<usize>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    init_logging(logging).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let options = CsvOptions::default()
        .date_column(args.date_column.as_str())
        .value_column(args.value_column.as_str())
        .date_format(args.date_format.as_str());
    let series = read_series_csv(&args.input, &options)
        .with_context(|| format!("failed to read series from {}", args.input.display()))?;

    let config = GrowthPeriodConfig::default()
        .index_threshold(args.index_threshold)
        .delta_threshold(args.delta_threshold)
        .smoothing_window(args.window);
    let result =
        detect_growth_periods(&series, &config).context("growth period detection failed")?;

    tracing::info!(
        observations = result.len(),
        germination = result.label_count(PeriodLabel::Germination),
        harvest = result.label_count(PeriodLabel::Harvest),
        "labeled series"
    );

    if let Some(min_run) = args.min_run {
        for label in [PeriodLabel::Germination, PeriodLabel::Harvest] {
            for period in result.periods(label, min_run) {
                tracing::info!(
                    %label,
                    start = %period.start_date,
                    end = %period.end_date,
                    observations = period.run.len(),
                    "period"
                );
            }
        }
    }

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_annotated_csv(file, &result)?;
            tracing::info!(path = %path.display(), "wrote annotated series");
        }
        None => write_annotated_csv(std::io::stdout().lock(), &result)?,
    }

    Ok(())
}
