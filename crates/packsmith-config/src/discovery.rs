//! File-based project discovery for CLI use.
//!
//! Library users build [`ProjectConfig`] or [`Overrides`](crate::Overrides)
//! directly; the CLI looks for a recipe on disk and layers environment
//! variables over it.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::project::ProjectConfig;

/// Name of the recipe file looked up in the project root.
pub const CONFIG_FILE: &str = "packsmith.toml";

/// Field of `package.json` holding an inline recipe.
pub const PACKAGE_FIELD: &str = "packsmith";

/// Prefix for environment overrides, e.g. `PACKSMITH_OPTIONS__PUBLIC_PATH`.
pub const ENV_PREFIX: &str = "PACKSMITH_";

pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a recipe in the root directory.
    ///
    /// Searches in this order:
    /// 1. `packsmith.toml`
    /// 2. `package.json` with a non-null `packsmith` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the discovered recipe, failing when none exists.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        self.load_from(&path)
    }

    /// Load the discovered recipe, or defaults when the project has none.
    /// Environment overrides apply in both cases.
    pub fn load_or_default(&self) -> Result<ProjectConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => extract(Figment::new().merge(Serialized::defaults(ProjectConfig::default()))),
        }
    }

    /// Load a recipe from an explicit path (`.toml` or `.json`).
    pub fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let figment = Figment::new().merge(Serialized::defaults(ProjectConfig::default()));
        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("json") if path.file_name() == Some(OsStr::new("package.json")) => {
                figment.merge(Figment::from(Json::file(path)).focus(PACKAGE_FIELD))
            }
            Some("json") => figment.merge(Json::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(path = %path.display(), "loading project recipe");
        extract(figment)
    }
}

fn extract(figment: Figment) -> Result<ProjectConfig> {
    let env = Env::prefixed(ENV_PREFIX)
        .split("__")
        .map(|key| canonical_key(key.as_str()).into())
        .lowercase(false);
    let config = figment.merge(env).extract()?;
    Ok(config)
}

/// Lowercase an environment key and respell the segments whose recipe name
/// is camelCase, so env values land on the same key as the file's.
fn canonical_key(key: &str) -> String {
    key.to_ascii_lowercase()
        .split('.')
        .map(|segment| match segment {
            "dev_server" | "devserver" => "devServer",
            "history_api_fallback" | "historyapifallback" => "historyApiFallback",
            "static_dir" => "static",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(".")
}
