use anyhow::{Context, Result};
use log::{debug, error};

use address_book::{Config, FileRecordSource, OutputFormat, RecordSource, ReportEngine};

/// Names compared in the third question
const OLDER_NAME: &str = "Bill";
const YOUNGER_NAME: &str = "Paul";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // One generic line for the user, full chain for debugging
        error!("The application was terminated based on a technical error.");
        debug!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    debug!("Configuration: {:?}", config);

    // 1. Load address book and answer all questions before printing anything
    let source = FileRecordSource::new(&config.data_path);
    let report = ReportEngine::new()
        .analyse(&source, OLDER_NAME, YOUNGER_NAME)
        .with_context(|| format!("Failed to analyse {}", source.describe()))?;

    // 2. Output
    match config.output {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
