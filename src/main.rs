mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{CliConfig, Config};
use std::io;
use tracing::{info, warn};
use transfer_processor::{
    balance::BalanceStore,
    io::{create_file, open_balances, open_transfers, write_balances, write_report},
    process_batch,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = CliConfig::parse();

    update_balances(&config)?;

    info!("Account balances updated successfully");

    Ok(())
}

fn update_balances<C: Config>(config: &C) -> Result<()> {
    let balances = open_balances(config.balances_path()).context("Failed to open balances file")?;
    let store = BalanceStore::load(balances).context("Failed to load account balances")?;

    match store.total() {
        Some(total) => info!("Loaded {} accounts holding {total} in total", store.len()),
        None => warn!(
            "Loaded {} accounts, total balance exceeds the decimal range",
            store.len()
        ),
    }

    let transfers =
        open_transfers(config.transfers_path()).context("Failed to open transfers file")?;
    let (store, reporter) = process_batch(store, transfers).context("Failed to process transfers")?;

    let summary = reporter.summary();
    info!(
        "Processed {} transfers: {} applied, {} rejected ({} insufficient funds, {} invalid account, {} negative amount, {} overflow)",
        reporter.len(),
        summary.applied,
        summary.rejected(),
        summary.insufficient_funds,
        summary.invalid_account,
        summary.negative_amount,
        summary.overflow,
    );

    let output = create_file(config.output_path()).context("Failed to create output file")?;
    write_balances(output, &store).context("Failed to write updated balances")?;

    if let Some(path) = config.report_path() {
        let report = create_file(path).context("Failed to create report file")?;
        write_report(report, &reporter).context("Failed to write transfer report")?;
    }

    Ok(())
}
