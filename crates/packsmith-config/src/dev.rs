//! Development server configuration types.
//!
//! The dev server itself belongs to the external build engine; these records
//! are forwarded verbatim into the snapshot's `devServer` field.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Directory served as static content
    #[serde(rename = "static", alias = "static_dir", default)]
    pub static_dir: StaticDirOptions,

    /// Fall back to `index.html` for unknown routes (single-page apps)
    #[serde(alias = "history_api_fallback", default = "default_true")]
    pub history_api_fallback: bool,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl DevServerOptions {
    /// Baseline dev server options rooted at a project directory.
    pub fn for_project(root: &Path) -> Self {
        Self {
            static_dir: StaticDirOptions {
                directory: root.join("public"),
                watch: true,
            },
            history_api_fallback: true,
            port: default_port(),
        }
    }
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            static_dir: StaticDirOptions::default(),
            history_api_fallback: true,
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDirOptions {
    #[serde(default = "default_static_dir")]
    pub directory: PathBuf,

    #[serde(default = "default_true")]
    pub watch: bool,
}

impl Default for StaticDirOptions {
    fn default() -> Self {
        Self {
            directory: default_static_dir(),
            watch: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    9000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_bundler_field_names() {
        let dev = DevServerOptions::for_project(Path::new("/p"));
        let value = serde_json::to_value(&dev).unwrap();

        assert_eq!(value["static"]["directory"], json!("/p/public"));
        assert_eq!(value["static"]["watch"], json!(true));
        assert_eq!(value["historyApiFallback"], json!(true));
        assert_eq!(value["port"], json!(9000));
    }

    #[test]
    fn partial_input_fills_defaults() {
        let dev: DevServerOptions = serde_json::from_value(json!({ "port": 3000 })).unwrap();
        assert_eq!(dev.port, 3000);
        assert!(dev.history_api_fallback);
        assert_eq!(dev.static_dir.directory, PathBuf::from("public"));
    }
}
