//! # adder
//!
//! Captures an addend in a closure, calls it once per value and prints each
//! sum on its own line.
//!
//! ## Error Handling
//!
//! Configuration problems and represented failures from the closure (such as
//! overflow) are reported through `anyhow` and exit non-zero. Nothing here
//! force-unwraps.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use railcall::adder::AdderClosure;
use railcall::cli::Cli;
use railcall::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("Failed to load adder configuration")?;

    init_tracing(&config.log_filter);

    if cli.show_config {
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    info!(addend = config.addend, calls = config.values.len(), "adder starting");

    let mut adder = AdderClosure::new(config.addend);
    let sums = adder.call_each(&config.values);
    adder.delete();

    let sums = sums
        .into_std()
        .with_context(|| format!("Adding {:?} to {} failed", config.values, config.addend))?;

    for sum in sums {
        println!("{sum}");
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over the configured filter.
fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
