//! Command-line interface definition.
//!
//! - `packsmith build` - Assemble a snapshot and emit it as JSON
//! - `packsmith check` - Assemble and validate against the filesystem
//! - `packsmith defaults` - Print the effective options or the resolved recipe

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, DefaultsArgs, SessionArgs};

/// Packsmith - staged bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "packsmith",
    version,
    about = "Assemble bundler configuration from feature stages",
    long_about = "Packsmith merges project options over environment-derived defaults,\n\
                  applies the selected feature stages in order, and emits the resulting\n\
                  configuration snapshot as JSON for the build engine."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
