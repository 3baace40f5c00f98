//! Option merging and project configuration for packsmith.
//!
//! A build session starts from a baseline option set derived from the
//! [`Environment`], then applies caller [`Overrides`] key by key. The result is
//! an immutable [`EffectiveOptions`] record that every feature stage reads.

pub mod dev;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod filenames;
pub mod options;
pub mod overrides;
pub mod project;

pub use dev::{DevServerOptions, StaticDirOptions};
pub use discovery::ConfigDiscovery;
pub use environment::Environment;
pub use error::{ConfigError, Result};
pub use filenames::{CONTENT_HASH_TOKEN, OutputFilenames};
pub use options::{DEFAULT_ASSET_INLINE_SIZE_LIMIT, EffectiveOptions, merge};
pub use overrides::Overrides;
pub use project::{HtmlPage, ProjectConfig, StageSelection};
