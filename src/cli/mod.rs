//! CLI argument parsing for lazypath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DemoArgs, RouteArgs};
pub use lazypath_core::format::OutputFormat;
use parse::parse_output_format;

/// Lazypath - shortest paths over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "lazypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `lazypath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "LAZYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths over edges given on the command line
    Route(RouteArgs),

    /// Run the built-in example graph (A-B 5, A-C 10, B-D 3, C-D 2, D-E 4)
    Demo(DemoArgs),
}
