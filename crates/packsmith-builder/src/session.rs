//! One build session: merged options, accumulated rules and plugins, and the
//! assembler that turns them into a snapshot.

use std::path::PathBuf;

use packsmith_config::{EffectiveOptions, Environment, Overrides, merge};
use tracing::{debug, info};

use crate::base::BaseConfig;
use crate::error::{BuildError, Result};
use crate::pattern::{HTML, JSON, Pattern, SCRIPT};
use crate::plugin::{HtmlOptions, PluginDescriptor};
use crate::registry::RuleRegistry;
use crate::rule::{ModuleType, RuleDescriptor};
use crate::snapshot::{BuildSnapshot, CompositeRule, ModuleConfig};
use crate::stages::{
    AssetsStage, HtmlStage, ManifestStage, ScriptsStage, Stage, StageSink, StylesStage,
    TypeScriptStage,
};

/// State accumulated between `initialize` and `finalize`.
///
/// Starting over means constructing a new session; nothing here is ever
/// cleared in place.
#[derive(Debug, Clone)]
pub struct BuildSession {
    options: EffectiveOptions,
    base: BaseConfig,
    rules: RuleRegistry,
    pre_rules: Vec<RuleDescriptor>,
    plugins: Vec<PluginDescriptor>,
    applied: Vec<&'static str>,
    messages: Vec<String>,
    finalized: bool,
}

impl BuildSession {
    /// Merge `overrides` over the environment's baseline and start a session.
    pub fn initialize(env: &Environment, overrides: Overrides) -> Self {
        let options = merge(EffectiveOptions::baseline(env), overrides);
        let base = BaseConfig::from_options(&options, env);

        let mut messages = Vec::new();
        if env.serve {
            messages.push(format!(
                "Your server is running on http://localhost:{}",
                options.dev_server.port
            ));
        }

        debug!(
            mode = options.mode(),
            src = %options.src_path.display(),
            "initialized build session"
        );

        Self {
            options,
            base,
            rules: RuleRegistry::new(),
            pre_rules: Vec::new(),
            plugins: Vec::new(),
            applied: Vec::new(),
            messages,
            finalized: false,
        }
    }

    pub fn options(&self) -> &EffectiveOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Notices for the user, e.g. the dev server address in serve mode.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Run `stage` against this session.
    pub fn apply<S: Stage + ?Sized>(&mut self, stage: &S) -> Result<&mut Self> {
        let name = stage.name();
        if self.finalized {
            return Err(BuildError::StageAfterFinalize { stage: name });
        }
        if !stage.repeatable() && self.applied.contains(&name) {
            return Err(BuildError::StageAlreadyApplied { stage: name });
        }

        let mut sink = StageSink::new(&mut self.rules, &mut self.pre_rules, &mut self.plugins);
        stage.apply(&self.options, &mut sink);
        let (rules, plugins) = sink.counts();

        self.applied.push(name);
        debug!(stage = name, rules, plugins, "applied stage");
        Ok(self)
    }

    pub fn enable_typescript(&mut self) -> Result<&mut Self> {
        self.apply(&TypeScriptStage)
    }

    pub fn enable_styles(&mut self) -> Result<&mut Self> {
        self.apply(&StylesStage)
    }

    pub fn add_html(
        &mut self,
        template: impl Into<PathBuf>,
        options: Option<HtmlOptions>,
    ) -> Result<&mut Self> {
        self.apply(&HtmlStage::new(template, options))
    }

    pub fn enable_scripts(&mut self) -> Result<&mut Self> {
        self.apply(&ScriptsStage)
    }

    pub fn enable_assets(&mut self) -> Result<&mut Self> {
        self.apply(&AssetsStage)
    }

    pub fn enable_manifest(&mut self) -> Result<&mut Self> {
        self.apply(&ManifestStage)
    }

    /// Assemble the snapshot.
    ///
    /// The registry and plugin list are read, not cleared. A session can be
    /// finalized once; later calls fail with [`BuildError::AlreadyFinalized`].
    pub fn finalize(&mut self) -> Result<BuildSnapshot> {
        if self.finalized {
            return Err(BuildError::AlreadyFinalized);
        }
        self.finalized = true;

        let composite = CompositeRule::new(self.rules.as_slice().to_vec(), catch_all());
        let module = ModuleConfig::new(self.pre_rules.clone(), composite);
        let snapshot = BuildSnapshot::new(self.base.clone(), module, self.plugins.clone());

        info!(
            rules = snapshot.composite().len(),
            plugins = snapshot.plugins().len(),
            mode = self.options.mode(),
            "assembled configuration"
        );
        Ok(snapshot)
    }
}

/// Any file no earlier rule claimed, except scripts, markup and data files
/// which the engine handles natively.
fn catch_all() -> RuleDescriptor {
    RuleDescriptor::new()
        .with_exclude(Pattern::builtin(SCRIPT))
        .with_exclude(Pattern::builtin(HTML))
        .with_exclude(Pattern::builtin(JSON))
        .with_type(ModuleType::Asset)
}
