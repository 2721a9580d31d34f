//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;

/// Adder - add values to a captured addend
#[derive(Parser, Debug, Default)]
#[command(name = "adder")]
#[command(version)]
#[command(about = "Capture an addend in a closure and add each value to it")]
#[command(
    long_about = "Builds a closure over a fixed addend, calls it once per value and prints each sum. \
                  Settings come from defaults, an optional TOML file, RAILCALL_* environment \
                  variables and finally these flags."
)]
pub struct Cli {
    /// Values passed to the closure, one call each
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Addend captured by the closure
    #[arg(short, long, allow_negative_numbers = true)]
    pub addend: Option<i64>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "railcall_core=trace"
    #[arg(long)]
    pub log: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}
