//! Command-line adapter for clivm.
//!
//! Parses arguments, wires the core resolver to the real environment in
//! [`bootstrap`], and renders results for humans or as JSON.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only exercised by the binary and integration tests
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
