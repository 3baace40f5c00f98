//! The finished configuration handed to the build engine.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::iter;
use std::path::Path;

use crate::base::BaseConfig;
use crate::error::Result;
use crate::plugin::PluginDescriptor;
use crate::rule::RuleDescriptor;

/// An independent, fully assembled configuration.
///
/// Every call to finalize produces a new value; nothing in it is shared with
/// the session that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSnapshot {
    #[serde(flatten)]
    base: BaseConfig,
    module: ModuleConfig,
    plugins: Vec<PluginDescriptor>,
}

impl BuildSnapshot {
    pub(crate) fn new(
        base: BaseConfig,
        module: ModuleConfig,
        plugins: Vec<PluginDescriptor>,
    ) -> Self {
        Self {
            base,
            module,
            plugins,
        }
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn module(&self) -> &ModuleConfig {
        &self.module
    }

    /// The first-match rule sequence, catch-all included.
    pub fn composite(&self) -> &CompositeRule {
        &self.module.composite
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// First rule of the composite sequence that accepts `path`.
    pub fn resolve(&self, path: &Path) -> Option<&RuleDescriptor> {
        self.composite().first_match(path)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The `module` section: pre-loader rules followed by the composite rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    strict_export_presence: bool,
    pre_rules: Vec<RuleDescriptor>,
    composite: CompositeRule,
}

impl ModuleConfig {
    pub(crate) fn new(pre_rules: Vec<RuleDescriptor>, composite: CompositeRule) -> Self {
        Self {
            strict_export_presence: true,
            pre_rules,
            composite,
        }
    }

    pub fn pre_rules(&self) -> &[RuleDescriptor] {
        &self.pre_rules
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ModuleRuleRef<'a> {
    Rule(&'a RuleDescriptor),
    OneOf(&'a CompositeRule),
}

impl Serialize for ModuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rules: Vec<ModuleRuleRef<'_>> = self
            .pre_rules
            .iter()
            .map(ModuleRuleRef::Rule)
            .chain(iter::once(ModuleRuleRef::OneOf(&self.composite)))
            .collect();

        let mut state = serializer.serialize_struct("ModuleConfig", 2)?;
        state.serialize_field("strictExportPresence", &self.strict_export_presence)?;
        state.serialize_field("rules", &rules)?;
        state.end()
    }
}

/// Ordered rules of which the engine applies only the first match.
///
/// The terminal catch-all is a separate field, so it is always last and
/// appears exactly once no matter how the specific rules were added.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeRule {
    rules: Vec<RuleDescriptor>,
    terminal: RuleDescriptor,
}

impl CompositeRule {
    pub(crate) fn new(rules: Vec<RuleDescriptor>, terminal: RuleDescriptor) -> Self {
        Self { rules, terminal }
    }

    /// Rules contributed by stages, in insertion order.
    pub fn specific(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    pub fn terminal(&self) -> &RuleDescriptor {
        &self.terminal
    }

    /// Every rule in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.rules.iter().chain(iter::once(&self.terminal))
    }

    /// Number of rules including the terminal one.
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first_match(&self, path: &Path) -> Option<&RuleDescriptor> {
        self.iter().find(|rule| rule.accepts(path))
    }
}

impl Serialize for CompositeRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rules: Vec<&RuleDescriptor> = self.iter().collect();
        let mut state = serializer.serialize_struct("CompositeRule", 1)?;
        state.serialize_field("oneOf", &rules)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{CSS, Pattern};
    use crate::rule::{ModuleType, TransformStep};
    use serde_json::json;

    fn composite() -> CompositeRule {
        CompositeRule::new(
            vec![
                RuleDescriptor::new()
                    .with_test(Pattern::builtin(CSS))
                    .with_step(TransformStep::new("css-loader")),
            ],
            RuleDescriptor::new().with_type(ModuleType::Asset),
        )
    }

    #[test]
    fn terminal_serializes_last() {
        let value = serde_json::to_value(composite()).unwrap();
        let one_of = value["oneOf"].as_array().unwrap();
        assert_eq!(one_of.len(), 2);
        assert_eq!(one_of[1], json!({ "type": "asset" }));
    }

    #[test]
    fn first_match_prefers_specific_rules() {
        let rules = composite();
        let css = rules.first_match(Path::new("/p/a.css")).unwrap();
        assert_eq!(css.loaders().next(), Some("css-loader"));

        let other = rules.first_match(Path::new("/p/a.woff")).unwrap();
        assert_eq!(other, rules.terminal());
    }

    #[test]
    fn module_rules_put_composite_after_pre_rules() {
        let pre = RuleDescriptor::new().with_step(TransformStep::new("source-map-loader"));
        let module = ModuleConfig::new(vec![pre], composite());

        let value = serde_json::to_value(&module).unwrap();
        assert_eq!(value["strictExportPresence"], json!(true));
        let rules = value["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].get("use").is_some());
        assert!(rules[1].get("oneOf").is_some());
    }
}
