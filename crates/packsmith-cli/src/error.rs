//! Error handling for the packsmith CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`; `main` turns
//! the result into a miette report.

use std::path::PathBuf;

use packsmith_builder::BuildError;
use packsmith_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Recipe discovery or loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session ordering, stage or validation failure
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Writing the snapshot failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CLI error to a miette report, attaching hints where known.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(ConfigError::NotFound(path)) => miette::miette!(
            "Config file not found: {}\n\nHint: Create a packsmith.toml or pass --config <path>",
            path.display()
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

fn build_error_to_miette(err: BuildError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!("Build error: {}\n\nHint: {}", err, hint),
        None => miette::miette!("Build error: {}", err),
    }
}
