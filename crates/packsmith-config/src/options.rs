//! The effective option record and the merge that produces it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dev::DevServerOptions;
use crate::environment::Environment;
use crate::filenames::OutputFilenames;
use crate::overrides::Overrides;

/// Assets at or below this size (bytes) are inlined as data URLs.
pub const DEFAULT_ASSET_INLINE_SIZE_LIMIT: u64 = 4 * 1024;

/// Options every stage of a build session reads.
///
/// Created once per session by [`merge`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveOptions {
    pub src_path: PathBuf,
    pub dest_path: PathBuf,
    pub public_path: String,
    pub production: bool,
    #[serde(rename = "devServer")]
    pub dev_server: DevServerOptions,
    pub asset_inline_size_limit: u64,
    pub entry_point: Vec<PathBuf>,

    /// Project directory used for project-level files such as `tsconfig.json`.
    pub project_root: PathBuf,

    /// Derived from `production`; recomputed on every merge.
    pub filenames: OutputFilenames,
}

impl EffectiveOptions {
    /// Baseline options for a project rooted at `env.project_root`.
    pub fn baseline(env: &Environment) -> Self {
        let root = env.project_root.as_path();
        let src_path = root.join("src");
        let entry_point = vec![src_path.join("index.tsx")];

        Self {
            src_path,
            dest_path: root.join("dist"),
            public_path: "/".to_string(),
            production: env.production,
            dev_server: DevServerOptions::for_project(root),
            asset_inline_size_limit: DEFAULT_ASSET_INLINE_SIZE_LIMIT,
            entry_point,
            project_root: root.to_path_buf(),
            filenames: OutputFilenames::for_mode(env.production),
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.production {
            "production"
        } else {
            "development"
        }
    }

    pub fn tsconfig_path(&self) -> PathBuf {
        self.project_root.join("tsconfig.json")
    }

    pub fn src_path(&self) -> &Path {
        &self.src_path
    }
}

/// Apply `overrides` over `baseline` one key at a time.
///
/// Overridden keys take the caller's value, the rest keep the baseline value.
/// The filename templates are rebuilt afterwards since `production` may have
/// changed.
pub fn merge(baseline: EffectiveOptions, overrides: Overrides) -> EffectiveOptions {
    let Overrides {
        src_path,
        dest_path,
        public_path,
        production,
        dev_server,
        asset_inline_size_limit,
        entry_point,
    } = overrides;

    let production = production.unwrap_or(baseline.production);

    EffectiveOptions {
        src_path: src_path.unwrap_or(baseline.src_path),
        dest_path: dest_path.unwrap_or(baseline.dest_path),
        public_path: public_path.unwrap_or(baseline.public_path),
        production,
        dev_server: dev_server.unwrap_or(baseline.dev_server),
        asset_inline_size_limit: asset_inline_size_limit
            .unwrap_or(baseline.asset_inline_size_limit),
        entry_point: entry_point.unwrap_or(baseline.entry_point),
        project_root: baseline.project_root,
        filenames: OutputFilenames::for_mode(production),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filenames::CONTENT_HASH_TOKEN;

    fn baseline() -> EffectiveOptions {
        EffectiveOptions::baseline(&Environment::new("/p"))
    }

    #[test]
    fn baseline_is_rooted_at_project() {
        let options = baseline();
        assert_eq!(options.src_path, PathBuf::from("/p/src"));
        assert_eq!(options.dest_path, PathBuf::from("/p/dist"));
        assert_eq!(options.public_path, "/");
        assert_eq!(options.entry_point, vec![PathBuf::from("/p/src/index.tsx")]);
        assert_eq!(options.asset_inline_size_limit, 4096);
        assert_eq!(options.tsconfig_path(), PathBuf::from("/p/tsconfig.json"));
    }

    #[test]
    fn empty_overrides_keep_baseline() {
        assert_eq!(merge(baseline(), Overrides::default()), baseline());
    }

    #[test]
    fn production_override_rebuilds_filenames() {
        let merged = merge(baseline(), Overrides::default().with_production(true));
        assert!(merged.production);
        assert!(merged.filenames.stylesheet.contains(CONTENT_HASH_TOKEN));
        assert_eq!(merged.mode(), "production");
    }

    #[test]
    fn entry_point_does_not_follow_src_override() {
        let merged = merge(baseline(), Overrides::default().with_src_path("/other/src"));
        assert_eq!(merged.src_path, PathBuf::from("/other/src"));
        assert_eq!(merged.entry_point, vec![PathBuf::from("/p/src/index.tsx")]);
    }
}
