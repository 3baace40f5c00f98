//! Long-lived facade over successive build sessions.
//!
//! Suits callers that rebuild repeatedly in one process, such as a watch
//! loop: each `initialize` swaps in a fresh [`BuildSession`], and every
//! operation before the first `initialize` fails fast.

use std::path::PathBuf;

use packsmith_config::{Environment, Overrides};

use crate::error::{BuildError, Result};
use crate::plugin::HtmlOptions;
use crate::session::BuildSession;
use crate::snapshot::BuildSnapshot;
use crate::stages::Stage;

#[derive(Debug, Clone)]
pub struct Builder {
    env: Environment,
    session: Option<BuildSession>,
}

impl Builder {
    pub fn new(env: Environment) -> Self {
        Self { env, session: None }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Start a new session, discarding the previous one.
    pub fn initialize(&mut self, overrides: Overrides) -> &mut Self {
        self.session = Some(BuildSession::initialize(&self.env, overrides));
        self
    }

    pub fn session(&self) -> Option<&BuildSession> {
        self.session.as_ref()
    }

    fn session_mut(&mut self, operation: &'static str) -> Result<&mut BuildSession> {
        self.session
            .as_mut()
            .ok_or(BuildError::NotInitialized { operation })
    }

    pub fn apply<S: Stage + ?Sized>(&mut self, stage: &S) -> Result<&mut Self> {
        self.session_mut(stage.name())?.apply(stage)?;
        Ok(self)
    }

    pub fn enable_typescript(&mut self) -> Result<&mut Self> {
        self.session_mut("enable_typescript")?.enable_typescript()?;
        Ok(self)
    }

    pub fn enable_styles(&mut self) -> Result<&mut Self> {
        self.session_mut("enable_styles")?.enable_styles()?;
        Ok(self)
    }

    pub fn add_html(
        &mut self,
        template: impl Into<PathBuf>,
        options: Option<HtmlOptions>,
    ) -> Result<&mut Self> {
        self.session_mut("add_html")?.add_html(template, options)?;
        Ok(self)
    }

    pub fn enable_scripts(&mut self) -> Result<&mut Self> {
        self.session_mut("enable_scripts")?.enable_scripts()?;
        Ok(self)
    }

    pub fn enable_assets(&mut self) -> Result<&mut Self> {
        self.session_mut("enable_assets")?.enable_assets()?;
        Ok(self)
    }

    pub fn enable_manifest(&mut self) -> Result<&mut Self> {
        self.session_mut("enable_manifest")?.enable_manifest()?;
        Ok(self)
    }

    pub fn finalize(&mut self) -> Result<BuildSnapshot> {
        self.session_mut("finalize")?.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_before_initialize_fail() {
        let mut builder = Builder::new(Environment::new("/p"));

        assert!(matches!(
            builder.enable_typescript(),
            Err(BuildError::NotInitialized { operation: "enable_typescript" })
        ));
        assert!(matches!(
            builder.finalize(),
            Err(BuildError::NotInitialized { operation: "finalize" })
        ));
        assert!(builder.session().is_none());
    }

    #[test]
    fn initialize_replaces_previous_session() {
        let mut builder = Builder::new(Environment::new("/p"));
        builder.initialize(Overrides::default());
        builder.enable_styles().unwrap();
        assert_eq!(builder.session().unwrap().rules().len(), 3);

        builder.initialize(Overrides::default());
        assert!(builder.session().unwrap().rules().is_empty());
        builder.enable_styles().unwrap();
        assert_eq!(builder.session().unwrap().rules().len(), 3);
    }
}
