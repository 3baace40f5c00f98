//! Caller-supplied overrides applied over the baseline options.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result};

/// One optional slot per recognized option key.
///
/// A `Some` value replaces the baseline value wholesale, including nested
/// records such as `dev_server`; there is no recursive merge below this level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,

    #[serde(
        default,
        rename = "devServer",
        alias = "dev_server",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_server: Option<DevServerOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_inline_size_limit: Option<u64>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_point: Option<Vec<PathBuf>>,
}

impl Overrides {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "overrides".to_string(),
            message: e.to_string(),
        })
    }

    pub fn with_src_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.src_path = Some(path.into());
        self
    }

    pub fn with_dest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_path = Some(path.into());
        self
    }

    pub fn with_public_path(mut self, path: impl Into<String>) -> Self {
        self.public_path = Some(path.into());
        self
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = Some(production);
        self
    }

    pub fn with_dev_server(mut self, dev_server: DevServerOptions) -> Self {
        self.dev_server = Some(dev_server);
        self
    }

    pub fn with_asset_inline_size_limit(mut self, limit: u64) -> Self {
        self.asset_inline_size_limit = Some(limit);
        self
    }

    pub fn with_entry_point(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry_point
            .get_or_insert_with(Vec::new)
            .push(entry.into());
        self
    }

    /// Layer `other` on top of `self`; slots set in `other` win.
    pub fn layer(self, other: Overrides) -> Self {
        Self {
            src_path: other.src_path.or(self.src_path),
            dest_path: other.dest_path.or(self.dest_path),
            public_path: other.public_path.or(self.public_path),
            production: other.production.or(self.production),
            dev_server: other.dev_server.or(self.dev_server),
            asset_inline_size_limit: other
                .asset_inline_size_limit
                .or(self.asset_inline_size_limit),
            entry_point: other.entry_point.or(self.entry_point),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<PathBuf>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(path) => vec![path],
        OneOrMany::Many(paths) => paths,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_single_entry_point() {
        let overrides = Overrides::from_value(json!({ "entry_point": "/p/src/main.ts" })).unwrap();
        assert_eq!(
            overrides.entry_point,
            Some(vec![PathBuf::from("/p/src/main.ts")])
        );
    }

    #[test]
    fn accepts_entry_point_list_and_dev_server_spelling() {
        let overrides = Overrides::from_value(json!({
            "entry_point": ["a.ts", "b.ts"],
            "devServer": { "port": 8080 }
        }))
        .unwrap();
        assert_eq!(overrides.entry_point.unwrap().len(), 2);
        assert_eq!(overrides.dev_server.unwrap().port, 8080);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Overrides::from_value(json!({ "srcPath": "/p" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn layer_prefers_upper_values() {
        let lower = Overrides::default()
            .with_src_path("/lower")
            .with_public_path("/");
        let upper = Overrides::default().with_src_path("/upper");

        let merged = lower.layer(upper);
        assert_eq!(merged.src_path, Some(PathBuf::from("/upper")));
        assert_eq!(merged.public_path.as_deref(), Some("/"));
    }
}
