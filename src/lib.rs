#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # railcall
//!
//! Demonstrates the railcall core end to end: an adder closure capturing a
//! fixed addend, configured from TOML, the environment and the command line.
//!
//! The core itself lives in [`railcall_core`] and is re-exported here.

pub use railcall_core;

pub mod adder;
pub mod cli;
pub mod config;
pub mod error;
