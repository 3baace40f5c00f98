//! Feature stages.
//!
//! A stage reads the session's [`EffectiveOptions`] and appends rules and
//! plugins through a [`StageSink`]. The sink is append-only and exposes nothing
//! another stage wrote, so stages compose in any order.

mod assets;
mod html;
mod manifest;
mod scripts;
mod styles;
mod typescript;

pub use assets::AssetsStage;
pub use html::HtmlStage;
pub use manifest::ManifestStage;
pub use scripts::ScriptsStage;
pub use styles::{StylesStage, StylesheetSyntax};
pub use typescript::TypeScriptStage;

use packsmith_config::EffectiveOptions;

use crate::plugin::PluginDescriptor;
use crate::registry::RuleRegistry;
use crate::rule::RuleDescriptor;

/// A step contributing rules and plugins to a build session.
pub trait Stage {
    /// Name used in logs and ordering errors.
    fn name(&self) -> &'static str;

    /// Whether the stage may run more than once per session.
    ///
    /// Stages that append rules must not, or the registry would hold two
    /// rules covering the same files.
    fn repeatable(&self) -> bool {
        false
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>);
}

/// Append-only view of the session state handed to a stage.
pub struct StageSink<'a> {
    rules: &'a mut RuleRegistry,
    pre_rules: &'a mut Vec<RuleDescriptor>,
    plugins: &'a mut Vec<PluginDescriptor>,
    appended_rules: usize,
    appended_plugins: usize,
}

impl<'a> StageSink<'a> {
    pub(crate) fn new(
        rules: &'a mut RuleRegistry,
        pre_rules: &'a mut Vec<RuleDescriptor>,
        plugins: &'a mut Vec<PluginDescriptor>,
    ) -> Self {
        Self {
            rules,
            pre_rules,
            plugins,
            appended_rules: 0,
            appended_plugins: 0,
        }
    }

    /// Append a rule to the composite first-match sequence.
    pub fn rule(&mut self, rule: RuleDescriptor) {
        self.rules.append(rule);
        self.appended_rules += 1;
    }

    /// Append a rule that runs before the composite sequence (e.g. pre-loaders).
    pub fn pre_rule(&mut self, rule: RuleDescriptor) {
        self.pre_rules.push(rule);
        self.appended_rules += 1;
    }

    pub fn plugin(&mut self, plugin: PluginDescriptor) {
        self.plugins.push(plugin);
        self.appended_plugins += 1;
    }

    pub(crate) fn counts(&self) -> (usize, usize) {
        (self.appended_rules, self.appended_plugins)
    }
}
