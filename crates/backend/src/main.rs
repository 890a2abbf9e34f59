use anyhow::Context;
use backend::shared::config::{load_config, Config, ConfigSource, OutputFormat};
use backend::shared::data::dataset_file::{load_dataset, write_output};
use backend::shared::{logger, format::format_number};
use backend::usecases::u510_analyze_sales::{
    analyze_with_config, into_usecase_result, render_table,
};
use clap::Parser;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u510_analyze_sales::AnalyzeSales;
use std::path::PathBuf;
use std::process::ExitCode;

/// Статистика продаж по продавцам: выручка, прибыль, бонусы, топ товаров
#[derive(Parser)]
#[command(name = "backend")]
#[command(about = "Computes per-seller sales statistics from a JSON dataset")]
struct Args {
    /// Path to the dataset JSON (products, sellers, purchase_records)
    #[arg(long)]
    dataset: PathBuf,

    /// Path to config.toml (defaults to the one next to the binary, then embedded)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format, overrides [output].format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Compact JSON, overrides [output].pretty
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, source) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logger::init(&config.logging) {
        eprintln!("{:#}", e);
        return ExitCode::from(2);
    }
    match &source {
        ConfigSource::File(_) => tracing::info!("Loading config from: {}", source),
        ConfigSource::Embedded => {
            tracing::warn!("config.toml not found, using default embedded configuration")
        }
    }

    match into_usecase_result(run(&args, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(usecase_error) => {
            tracing::error!("{} failed: {}", AnalyzeSales::full_name(), usecase_error);
            match serde_json::to_string(&usecase_error) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", usecase_error),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> anyhow::Result<()> {
    logger::log(
        "startup",
        &format!("{} ({})", AnalyzeSales::display_name(), AnalyzeSales::full_name()),
    );
    tracing::debug!("{}", AnalyzeSales::description());

    let dataset = load_dataset(&args.dataset)?;

    let start_time = std::time::Instant::now();
    let reports = analyze_with_config(&dataset, config.policies.as_ref())?;
    tracing::info!(
        "Analysis finished in {}ms: {} sellers ranked",
        start_time.elapsed().as_millis(),
        format_number(reports.len() as u64)
    );

    let format = args.format.unwrap_or(config.output.format);
    let rendered = match format {
        OutputFormat::Json if config.output.pretty && !args.compact => {
            serde_json::to_string_pretty(&reports).context("failed to serialize report")?
        }
        OutputFormat::Json => serde_json::to_string(&reports).context("failed to serialize report")?,
        OutputFormat::Table => render_table(&reports),
    };

    write_output(args.output.as_deref(), &rendered)
}
