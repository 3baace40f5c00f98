//! Command implementations.
//!
//! - [`build`] - Emit the snapshot as JSON
//! - [`check`] - Validate the snapshot against the filesystem
//! - [`defaults`] - Print effective options or the resolved recipe
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod build;
pub mod check;
pub mod defaults;
pub(crate) mod session;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use defaults::execute as defaults_execute;
