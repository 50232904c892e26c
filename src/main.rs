use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::warn;

use poverty_index::config::AppConfig;
use poverty_index::{
    telemetry, AppError, IndicatorKind, IndicatorRegistry, LocationDatasetImporter,
    LocationRecord, PovertyIndexCalculator,
};

#[derive(Parser, Debug)]
#[command(
    name = "poverty-index",
    about = "Score location datasets with the dynamic poverty index engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every location in a dataset and print the per-location results
    Score(DatasetArgs),
    /// Print aggregate summary statistics for a dataset
    Summary(DatasetArgs),
}

#[derive(Args, Debug, Default)]
struct DatasetArgs {
    /// CSV dataset of locations; defaults to the embedded sample
    #[arg(long)]
    data: Option<PathBuf>,
    /// Comma-separated indicator keys (or aliases) to activate; defaults to all
    #[arg(long)]
    layers: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Summary(DatasetArgs::default()));

    match command {
        Command::Score(args) => {
            let (calculator, locations) = prepare(&config, &args)?;
            let results = calculator.recalculate_all(&locations);
            print_json(&results, args.pretty)
        }
        Command::Summary(args) => {
            let (calculator, locations) = prepare(&config, &args)?;
            let summary = calculator.summary_statistics(&locations);
            print_json(&summary, args.pretty)
        }
    }
}

fn prepare(
    config: &AppConfig,
    args: &DatasetArgs,
) -> Result<(PovertyIndexCalculator, Vec<LocationRecord>), AppError> {
    let mut calculator =
        PovertyIndexCalculator::new(IndicatorRegistry::standard(), config.calculator.clone());

    if let Some(raw_layers) = &args.layers {
        calculator.update_active_layers(parse_layers(raw_layers));
    }

    let locations = match &args.data {
        Some(path) => LocationDatasetImporter::from_csv_path(path)?,
        None => sample_locations(),
    };

    Ok((calculator, locations))
}

fn parse_layers(raw: &str) -> Vec<IndicatorKind> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let resolved = IndicatorKind::from_key(token);
            if resolved.is_none() {
                warn!(layer = token, "skipping unknown indicator key");
            }
            resolved
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), AppError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

/// Small built-in dataset so the CLI demonstrates the engine without any
/// files on hand.
fn sample_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord::named("Riverside District")
            .with_value(IndicatorKind::PovertyIncidence, 72.0)
            .with_value(IndicatorKind::EducationAccess, 35.0)
            .with_value(IndicatorKind::HealthVulnerability, 68.0)
            .with_value(IndicatorKind::WaterAccess, 41.0)
            .with_value(IndicatorKind::EmploymentRate, 38.0),
        LocationRecord::named("Harbor District")
            .with_value(IndicatorKind::PovertyIncidence, 48.5)
            .with_value(IndicatorKind::EducationAccess, 61.0)
            .with_value(IndicatorKind::HealthVulnerability, 44.0)
            .with_value(IndicatorKind::WaterAccess, 70.0)
            .with_value(IndicatorKind::EmploymentRate, 55.0),
        LocationRecord::named("North Ward")
            .with_value(IndicatorKind::PovertyIncidence, 31.0)
            .with_value(IndicatorKind::EducationAccess, 82.0)
            .with_value(IndicatorKind::HealthVulnerability, 25.0)
            .with_value(IndicatorKind::WaterAccess, 88.0),
        LocationRecord::named("East Bank")
            .with_value(IndicatorKind::PovertyIncidence, 64.0)
            .with_value(IndicatorKind::HealthVulnerability, 59.0)
            .with_value(IndicatorKind::EmploymentRate, 47.0),
        LocationRecord::named("South Ward")
            .with_value(IndicatorKind::PovertyIncidence, 18.0)
            .with_value(IndicatorKind::EducationAccess, 90.0)
            .with_value(IndicatorKind::HealthVulnerability, 15.0)
            .with_value(IndicatorKind::WaterAccess, 93.0)
            .with_value(IndicatorKind::EmploymentRate, 72.0),
    ]
}
