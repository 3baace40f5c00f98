//! The base configuration built once at `initialize`.
//!
//! Everything in the final snapshot except the module rules and plugin list
//! lives here. Finalize clones it, so repeated snapshots share nothing.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::path::PathBuf;

use packsmith_config::{DevServerOptions, EffectiveOptions, Environment};

use crate::pattern::{NODE_MODULES, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn from_production(production: bool) -> Self {
        if production {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConfig {
    pub mode: Mode,

    /// Abort on the first error instead of tolerating failed modules
    pub bail: bool,

    pub context: PathBuf,
    pub entry: Vec<PathBuf>,

    /// Full build statistics; disabled in watch mode to keep rebuild output short
    pub stats: bool,

    pub output: OutputConfig,

    #[serde(serialize_with = "devtool_or_false")]
    pub devtool: Option<String>,

    pub dev_server: DevServerOptions,
    pub watch_options: WatchOptions,
    pub optimization: Optimization,
    pub resolve: Resolve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: String,
    pub chunk_filename: String,
    pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchOptions {
    pub ignored: Pattern,
    pub poll: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub minimize: bool,
    pub minimizer: Vec<MinimizerDescriptor>,
    pub split_chunks: SplitChunks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum MinimizerDescriptor {
    #[serde(rename = "terser-webpack-plugin")]
    Script(Value),

    #[serde(rename = "css-minimizer-webpack-plugin")]
    Stylesheet(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
    pub chunks: String,
    pub name: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolve {
    pub extensions: Vec<String>,
    pub alias: IndexMap<String, PathBuf>,
}

const RESOLVE_EXTENSIONS: [&str; 8] = [
    ".js", ".jsx", ".json", ".ts", ".tsx", ".css", ".scss", ".less",
];

impl BaseConfig {
    pub fn from_options(options: &EffectiveOptions, env: &Environment) -> Self {
        Self {
            mode: Mode::from_production(options.production),
            bail: true,
            context: options.src_path.clone(),
            entry: options.entry_point.clone(),
            stats: !env.watch,
            output: OutputConfig {
                path: options.dest_path.clone(),
                filename: options.filenames.script.clone(),
                chunk_filename: options.filenames.script_chunk.clone(),
                public_path: options.public_path.clone(),
            },
            devtool: (!options.production).then(|| "source-map".to_string()),
            dev_server: options.dev_server.clone(),
            watch_options: WatchOptions {
                ignored: Pattern::builtin(NODE_MODULES),
                poll: true,
            },
            optimization: Optimization {
                minimize: options.production,
                minimizer: vec![script_minimizer(), stylesheet_minimizer()],
                split_chunks: SplitChunks {
                    chunks: "all".to_string(),
                    name: false,
                },
            },
            resolve: Resolve {
                extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
                alias: IndexMap::new(),
            },
        }
    }
}

fn script_minimizer() -> MinimizerDescriptor {
    MinimizerDescriptor::Script(json!({
        "terserOptions": {
            "parse": { "ecma": 8 },
            "compress": { "ecma": 5, "warnings": false, "comparisons": false, "inline": 2 },
            "mangle": { "safari10": true },
            "output": { "ecma": 5, "comments": false, "ascii_only": true }
        },
        "parallel": true
    }))
}

fn stylesheet_minimizer() -> MinimizerDescriptor {
    MinimizerDescriptor::Stylesheet(json!({
        "minimizerOptions": {
            "preset": ["default", { "discardComments": { "removeAll": true } }]
        }
    }))
}

fn devtool_or_false<S: Serializer>(
    devtool: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match devtool {
        Some(name) => serializer.serialize_str(name),
        None => serializer.serialize_bool(false),
    }
}
