//! Output-plugin descriptors.
//!
//! Each descriptor names a plugin of the external build engine together with
//! the options it should be constructed with. Order in the snapshot is the
//! order the engine applies them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{BuildError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginDescriptor {
    #[serde(rename = "webpack-manifest-plugin")]
    Manifest(ManifestOptions),

    #[serde(rename = "fork-ts-checker-webpack-plugin")]
    TypeCheck(TypeCheckOptions),

    #[serde(rename = "mini-css-extract-plugin")]
    ExtractCss(ExtractCssOptions),

    #[serde(rename = "html-webpack-plugin")]
    Html(HtmlPluginOptions),
}

impl PluginDescriptor {
    /// Package name of the plugin the engine should instantiate.
    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::Manifest(_) => "webpack-manifest-plugin",
            PluginDescriptor::TypeCheck(_) => "fork-ts-checker-webpack-plugin",
            PluginDescriptor::ExtractCss(_) => "mini-css-extract-plugin",
            PluginDescriptor::Html(_) => "html-webpack-plugin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestOptions {
    pub file_name: String,

    /// Only list files belonging to initial chunks
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub initial_only: bool,
}

/// Asynchronous type-checking against a project `tsconfig.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCheckOptions {
    pub typescript: TypeScriptProject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptProject {
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractCssOptions {
    pub filename: String,
}

/// Resolved options of one generated HTML page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlPluginOptions {
    pub inject: bool,
    pub template: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<HtmlMinify>,

    /// Remaining caller options, forwarded untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller options for the HTML stage, merged over its defaults.
///
/// `inject` and `template` have dedicated slots; every other key (`title`,
/// `filename`, `chunks`, ...) is forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HtmlOptions {
    #[serde(default)]
    pub inject: Option<bool>,

    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HtmlOptions {
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map))
            .map_err(|err| BuildError::InvalidHtmlOptions(err.to_string()))
    }

    /// Set one option. `inject` and `template` go to their dedicated slots
    /// when the value has the matching type.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        match (key.as_str(), value.into()) {
            ("inject", Value::Bool(inject)) => self.inject = Some(inject),
            ("template", Value::String(template)) => self.template = Some(template.into()),
            (_, value) => {
                self.extra.insert(key, value);
            }
        }
        self
    }
}

/// Markup minification switches applied in production builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinify {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_redundant_attributes: bool,
    pub use_short_doctype: bool,
    pub remove_empty_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    #[serde(rename = "minifyJS")]
    pub minify_js: bool,
    #[serde(rename = "minifyCSS")]
    pub minify_css: bool,
    #[serde(rename = "minifyURLs")]
    pub minify_urls: bool,
}

impl HtmlMinify {
    /// Every switch enabled.
    pub fn all() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_redundant_attributes: true,
            use_short_doctype: true,
            remove_empty_attributes: true,
            remove_style_link_type_attributes: true,
            minify_js: true,
            minify_css: true,
            minify_urls: true,
        }
    }
}
