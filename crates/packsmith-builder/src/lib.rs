//! Staged assembly of bundler configuration.
//!
//! A [`BuildSession`] is created from an [`Environment`] and caller
//! [`Overrides`]. Feature stages append transform rules and output plugins to
//! the session, and [`BuildSession::finalize`] assembles everything into one
//! [`BuildSnapshot`] for the external build engine.
//!
//! ```
//! use packsmith_builder::BuildSession;
//! use packsmith_config::{Environment, Overrides};
//!
//! let mut session = BuildSession::initialize(
//!     &Environment::new("/p"),
//!     Overrides::default().with_src_path("/p/src"),
//! );
//! session.enable_typescript().unwrap();
//! session.add_html("/p/src/index.html", None).unwrap();
//!
//! let snapshot = session.finalize().unwrap();
//! assert_eq!(snapshot.composite().len(), 2);
//! assert_eq!(snapshot.plugins().len(), 2);
//! ```
//!
//! # Rule ordering
//!
//! Rules are considered first-inserted-first by the build engine. Stages
//! append in call order, and the catch-all asset rule is held apart from the
//! registry so it always serializes last.

pub mod base;
pub mod builder;
pub mod error;
pub mod pattern;
pub mod plugin;
pub mod registry;
pub mod rule;
pub mod session;
pub mod snapshot;
pub mod stages;
pub mod validation;

pub use base::{BaseConfig, Mode, OutputConfig};
pub use builder::Builder;
pub use error::{BuildError, Result};
pub use pattern::Pattern;
pub use plugin::{
    ExtractCssOptions, HtmlMinify, HtmlOptions, HtmlPluginOptions, ManifestOptions,
    PluginDescriptor, TypeCheckOptions,
};
pub use registry::RuleRegistry;
pub use rule::{Enforce, ModuleType, RuleDescriptor, TransformStep};
pub use session::BuildSession;
pub use snapshot::{BuildSnapshot, CompositeRule, ModuleConfig};
pub use stages::{
    AssetsStage, HtmlStage, ManifestStage, ScriptsStage, Stage, StageSink, StylesStage,
    StylesheetSyntax, TypeScriptStage,
};
pub use validation::{FsValidator, SchemaValidator, SnapshotValidator, validate_fs, validate_schema};

pub use packsmith_config::{EffectiveOptions, Environment, Overrides};
