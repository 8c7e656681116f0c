//! replay-predict - one-shot predictor invoked by the search tool.
//!
//! ```text
//! # weekly analog replay paired with the exogenous signal
//! replay-predict 3,1,4,1,5,... 10,12,9,... 2,7,1
//!
//! # four-week single match with straight readout
//! replay-predict --method sequential-readout X_TRAIN Y_TRAIN X_TEST
//! ```
//!
//! Predictions go to stdout as comma-separated six-digit decimals; logs go to
//! stderr and are controlled through `RUST_LOG`.

use anyhow::Context;
use clap::Parser;
use replay_forecast::models::PredictionMethod;
use replay_forecast::utils::{format_series, parse_series};
use std::io::Write;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "replay-predict")]
#[command(about = "Predict the test period from comma-separated training data")]
#[command(version)]
struct Cli {
    /// Training exogenous values, comma-separated
    #[arg(allow_hyphen_values = true)]
    x_train: String,

    /// Training target values, comma-separated
    #[arg(allow_hyphen_values = true)]
    y_train: String,

    /// Test exogenous values, comma-separated; one prediction per value
    #[arg(allow_hyphen_values = true)]
    x_test: String,

    /// Prediction method
    #[arg(short, long, default_value = "sequential-repeat", value_parser = parse_method)]
    method: PredictionMethod,

    /// Override the replay period (replay methods only)
    #[arg(short, long)]
    period: Option<usize>,
}

fn parse_method(s: &str) -> Result<PredictionMethod, String> {
    s.parse().map_err(|e: replay_forecast::ForecastError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay_forecast=warn,replay_predict=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let x_train = parse_series(&cli.x_train).context("parsing X_TRAIN")?;
    let y_train = parse_series(&cli.y_train).context("parsing Y_TRAIN")?;
    let x_test = parse_series(&cli.x_test).context("parsing X_TEST")?;
    debug!(
        x_train = x_train.len(),
        y_train = y_train.len(),
        x_test = x_test.len(),
        "parsed arguments"
    );

    let predictor = match cli.period {
        Some(period) => cli.method.create_with_period(period)?,
        None => cli.method.create(),
    };
    let predictions = predictor
        .predict(&x_train, &y_train, &x_test)
        .with_context(|| format!("{} prediction failed", cli.method))?;
    info!(method = %cli.method, horizon = predictions.len(), "prediction complete");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_series(&predictions).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
