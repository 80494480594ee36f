use anyhow::Context;
use aq_scraper::config::Config;
use aq_scraper::constants::DEFAULT_CONFIG_PATH;
use aq_scraper::{logging, observability};
use aq_scraper::pipeline::Pipeline;
use aq_scraper::source::{FileSensorSource, HttpSensorSource};
use aq_scraper::types::SensorSource;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "aq_scraper")]
#[command(about = "Fetch live air-quality sensor readings and print them with their severity color")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to ./aq_scraper.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the sensor listing URL
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read a saved sensor listing from this JSON file instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write a Prometheus text snapshot of the run's counters to this file
    #[arg(long)]
    metrics_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path, true),
        None => Config::load(Path::new(DEFAULT_CONFIG_PATH), false),
    }
    .context("loading configuration")?;

    let mut source_config = config.source;
    if let Some(url) = cli.url {
        source_config.url = url;
    }

    let source: Box<dyn SensorSource> = match cli.input {
        Some(path) => Box::new(FileSensorSource::new(path)),
        None => Box::new(HttpSensorSource::new(&source_config)?),
    };

    let metrics_handle = match &cli.metrics_file {
        Some(_) => Some(observability::install_recorder()?),
        None => None,
    };

    let stdout = std::io::stdout();
    let outcome = Pipeline::run(&*source, stdout.lock()).await;

    // Failed runs are snapshotted too, so error counters reach the collector
    if let (Some(handle), Some(path)) = (&metrics_handle, &cli.metrics_file) {
        observability::write_snapshot(handle, path).context("writing metrics snapshot")?;
    }

    let result = outcome.context("sensor pipeline failed")?;

    info!(
        "Pipeline finished: {} readings from {}",
        result.total_records, result.source_name
    );
    Ok(())
}
