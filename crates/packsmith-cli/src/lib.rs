//! Packsmith CLI - emit staged bundler configuration.
//!
//! The CLI loads a project recipe (`packsmith.toml` or the `packsmith` field
//! of `package.json`), layers command-line flags over it, runs the selected
//! stages through a [`packsmith_builder::BuildSession`] and prints the
//! resulting snapshot as JSON for the external build engine.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `build`, `check` and `defaults`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
