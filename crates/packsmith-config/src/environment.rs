//! The environment signal read once per build session.

use std::env;
use std::path::PathBuf;

/// Variable consulted for production mode.
pub const MODE_VAR: &str = "NODE_ENV";

/// Process-level inputs that are not part of the override record.
///
/// `production` seeds the baseline option set; `serve` and `watch` describe how
/// the external engine will be run and only affect reporting fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub project_root: PathBuf,
    pub production: bool,
    pub serve: bool,
    pub watch: bool,
}

impl Environment {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            production: false,
            serve: false,
            watch: false,
        }
    }

    /// Read the current directory and `NODE_ENV`.
    pub fn from_process() -> std::io::Result<Self> {
        let root = env::current_dir()?;
        let production = production_from_env();
        tracing::debug!(production, root = %root.display(), "detected environment");
        Ok(Self {
            production,
            ..Self::new(root)
        })
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_serve(mut self, serve: bool) -> Self {
        self.serve = serve;
        self
    }

    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }
}

/// `true` when `NODE_ENV` is exactly `production`.
pub fn production_from_env() -> bool {
    env::var(MODE_VAR).is_ok_and(|value| value == "production")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn production_requires_exact_value() {
        unsafe { env::set_var(MODE_VAR, "production") };
        assert!(production_from_env());

        unsafe { env::set_var(MODE_VAR, "Production") };
        assert!(!production_from_env());

        unsafe { env::remove_var(MODE_VAR) };
        assert!(!production_from_env());
    }

    #[test]
    fn builder_methods_set_flags() {
        let env = Environment::new("/p")
            .with_production(true)
            .with_serve(true)
            .with_watch(true);
        assert!(env.production && env.serve && env.watch);
        assert_eq!(env.project_root, PathBuf::from("/p"));
    }
}
