//! Project recipes: option overrides plus the stages a project enables.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::overrides::Overrides;

/// Contents of `packsmith.toml` (or the `packsmith` field of `package.json`).
///
/// ```toml
/// [options]
/// src_path = "app"
///
/// [stages]
/// typescript = true
/// styles = true
///
/// [[html]]
/// template = "app/index.html"
/// options = { title = "Dashboard" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub options: Overrides,

    #[serde(default)]
    pub stages: StageSelection,

    #[serde(default)]
    pub html: Vec<HtmlPage>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSelection {
    #[serde(default)]
    pub typescript: bool,

    #[serde(default)]
    pub styles: bool,

    #[serde(default)]
    pub scripts: bool,

    #[serde(default)]
    pub assets: bool,

    #[serde(default)]
    pub manifest: bool,
}

impl StageSelection {
    /// Union of two selections; a stage enabled in either stays enabled.
    pub fn union(self, other: StageSelection) -> Self {
        Self {
            typescript: self.typescript || other.typescript,
            styles: self.styles || other.styles,
            scripts: self.scripts || other.scripts,
            assets: self.assets || other.assets,
            manifest: self.manifest || other.manifest,
        }
    }
}

/// One generated HTML page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPage {
    pub template: PathBuf,

    /// Plugin options forwarded over the stage defaults
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl HtmlPage {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            options: Map::new(),
        }
    }
}

impl ProjectConfig {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a recipe from `packsmith.toml` text, without environment layering.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.message().to_string(),
        })
    }

    /// Render the recipe as `packsmith.toml` text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }
}
