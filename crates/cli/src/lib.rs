//! `stockpulse` driver: load an inventory and a batch, apply the batch, and
//! print the transaction log followed by the reorder alerts.
//!
//! Output is one JSON object per line under a `Transaction Log:` and a
//! `Stock Alerts:` heading. Logs go to stderr.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;

use stockpulse_alerts::{stock_alerts_with, AlertThresholds, DEFAULT_WINDOW_DAYS, FALLBACK_REORDER_POINT};
use stockpulse_core::Clock;
use stockpulse_inventory::sample::{sample_inventory, sample_transactions};
use stockpulse_inventory::{process_transactions_with, Inventory, Transaction};
use stockpulse_observability::LogFormat;

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Text => LogFormat::Text,
        }
    }
}

/// Apply inventory transactions and report reorder alerts.
#[derive(Debug, Parser)]
#[command(name = "stockpulse", version, about = "Apply inventory transactions and report reorder alerts")]
pub struct Cli {
    /// Inventory JSON document (`{"products": {...}}`). Runs the built-in sample when omitted.
    #[arg(long, requires = "transactions")]
    pub inventory: Option<PathBuf>,

    /// Transaction batch as a JSON array
    #[arg(long, requires = "inventory")]
    pub transactions: Option<PathBuf>,

    /// Reorder point for products that do not define one
    #[arg(
        long,
        env = "STOCKPULSE_DEFAULT_REORDER",
        default_value_t = FALLBACK_REORDER_POINT,
        value_parser = parse_reorder_point
    )]
    pub default_reorder: f64,

    /// Trailing window, in days, for the sales velocity estimate
    #[arg(long, env = "STOCKPULSE_VELOCITY_WINDOW_DAYS", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Log format written to stderr
    #[arg(long, default_value = "json", value_enum)]
    pub log_format: LogFormatArg,
}

impl Cli {
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds::new()
            .with_default_reorder(self.default_reorder)
            .with_velocity_window_days(self.window_days)
    }
}

fn parse_reorder_point(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("expected a non-negative number, found {raw}"))
    }
}

/// Run one batch and write the report to `out`.
pub fn run<W: Write, C: Clock + ?Sized>(cli: &Cli, clock: &C, out: &mut W) -> Result<()> {
    let (inventory, transactions) = load_input(cli)?;
    tracing::info!(
        products = inventory.len(),
        transactions = transactions.len(),
        "processing transaction batch"
    );

    let (updated, log) =
        process_transactions_with(&inventory, &transactions, clock).context("transaction batch rejected")?;
    let alerts = stock_alerts_with(&updated, &cli.thresholds(), clock);

    writeln!(out, "Transaction Log:")?;
    for entry in &log {
        writeln!(out, "{}", serde_json::to_string(entry)?)?;
    }

    writeln!(out)?;
    writeln!(out, "Stock Alerts:")?;
    for alert in &alerts {
        writeln!(out, "{}", serde_json::to_string(alert)?)?;
    }

    Ok(())
}

fn load_input(cli: &Cli) -> Result<(Inventory, Vec<Transaction>)> {
    match (&cli.inventory, &cli.transactions) {
        (Some(inventory), Some(transactions)) => Ok((read_json(inventory)?, read_json(transactions)?)),
        _ => Ok((sample_inventory(), sample_transactions())),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
