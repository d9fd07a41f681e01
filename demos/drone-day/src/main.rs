//! drone-day — run one working day of drone deliveries from an order file.
//!
//! ```text
//! drone-day data/orders.txt --output DroneResults.txt --closes-at 21:00:00
//! ```
//!
//! Reads `<id> <destination> <HH:MM:SS>` lines, flies every order the
//! warehouse can fit in before closing, and writes one
//! `<id> <departure HH:MM:SS>` line per delivery followed by `NPS: <score>`.
//!
//! Set `RUST_LOG=debug` to follow every reveal, dispatch, and drop.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dd_core::{DepotConfig, SimTime};
use dd_output::{ResultsObserver, TextResultsWriter};
use dd_sim::DispatcherBuilder;
use dd_stream::load_orders_path;

// ── Command line ──────────────────────────────────────────────────────────────

/// Simulate a day of single-drone deliveries.
#[derive(Debug, Parser)]
#[command(name = "drone-day")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order file: one `<id> <destination> <HH:MM:SS>` per line.
    orders: PathBuf,

    /// Where to write the delivery results.
    #[arg(long, short, default_value = "DroneResults.txt")]
    output: PathBuf,

    /// JSON depot configuration; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opening time, overrides the configuration file.
    #[arg(long, value_name = "HH:MM:SS")]
    opens_at: Option<SimTime>,

    /// Closing time, overrides the configuration file.
    #[arg(long, value_name = "HH:MM:SS")]
    closes_at: Option<SimTime>,
}

impl Cli {
    fn depot_config(&self) -> Result<DepotConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => DepotConfig::default(),
        };
        if let Some(opens_at) = self.opens_at {
            config.opens_at = opens_at;
        }
        if let Some(closes_at) = self.closes_at {
            config.closes_at = closes_at;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<DepotConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading depot config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing depot config {}", path.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.depot_config()?;

    let orders = load_orders_path(&cli.orders)
        .with_context(|| format!("loading orders from {}", cli.orders.display()))?;
    info!(count = orders.len(), opens_at = %config.opens_at, closes_at = %config.closes_at, "orders loaded");

    let mut dispatcher = DispatcherBuilder::new(config).orders(orders).build()?;

    let writer = TextResultsWriter::from_path(&cli.output)
        .with_context(|| format!("creating results file {}", cli.output.display()))?;
    let mut observer = ResultsObserver::new(writer);

    let summary = dispatcher.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).with_context(|| format!("writing results to {}", cli.output.display()));
    }

    if summary.dropped > 0 {
        eprintln!(
            "{} order(s) could not be delivered before closing",
            summary.dropped
        );
    }
    let shown = std::fs::canonicalize(&cli.output).unwrap_or_else(|_| cli.output.clone());
    println!("Results located at {}", shown.display());
    Ok(())
}
