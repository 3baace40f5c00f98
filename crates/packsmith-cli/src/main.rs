//! Packsmith CLI - staged bundler configuration as JSON.
//!
//! Parses arguments, installs logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use packsmith_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(!no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Defaults(defaults_args) => commands::defaults_execute(defaults_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
