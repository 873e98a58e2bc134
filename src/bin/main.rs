use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crypto_split::presenter::present;
use crypto_split::rates::coinbase::{self, Coinbase};
use crypto_split::{split, SplitRequest};

/// Split a dollar amount across cryptocurrencies at live exchange rates.
#[derive(Parser, Debug)]
#[command(name = "crypto-split", version)]
struct Args {
    /// Amount to split
    amount: String,
    /// Replaces the first entry of --strings
    symbol1: Option<String>,
    /// Replaces the second entry of --strings
    symbol2: Option<String>,
    /// Comma separated list of asset symbols
    #[arg(short = 's', long, default_value = "BTC,ETH")]
    strings: String,
    /// Comma separated list of percentages that must add up to 100
    #[arg(short = 'n', long, default_value = "70,30")]
    numbers: String,
    /// Currency the amount is expressed in
    #[arg(long, env = "SPLIT_CURRENCY", default_value = coinbase::DEFAULT_CURRENCY)]
    currency: String,
    #[arg(long, env = "SPLIT_RATES_ENDPOINT", default_value = coinbase::ENDPOINT)]
    endpoint: String,
    #[arg(long, env = "SPLIT_TIMEOUT_SECS", default_value = "10")]
    timeout_secs: u64,
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // stdout carries the results, logs go to stderr
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    info!("{:?}", args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let provider = Coinbase::with_config(
        &args.endpoint,
        &args.currency,
        Duration::from_secs(args.timeout_secs),
    )
    .context("Failed to build exchange rate client")?;

    let request = SplitRequest::new(
        &args.amount,
        &args.strings,
        &args.numbers,
        &[args.symbol1, args.symbol2],
    )?;

    let results = split(&provider, &request).await?;

    let mut stdout = std::io::stdout().lock();
    present(&results, &mut stdout, !args.no_color).context("Failed to write results")?;
    Ok(())
}
