//! Rule descriptors: a file-pattern condition bound to a transform chain.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::pattern::{Pattern, one_or_many};

/// One module rule as the build engine expects it.
///
/// Field names follow the engine's rule schema (`test`, `include`, `exclude`,
/// `use`, `type`, `parser`, `enforce`). Empty conditions are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleDescriptor {
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "one_or_many")]
    pub test: Vec<Pattern>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,

    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "one_or_many")]
    pub exclude: Vec<Pattern>,

    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub transform_chain: Vec<TransformStep>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<ModuleType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,
}

impl RuleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test(mut self, pattern: Pattern) -> Self {
        self.test.push(pattern);
        self
    }

    pub fn with_include(mut self, path: impl Into<PathBuf>) -> Self {
        self.include = Some(path.into());
        self
    }

    pub fn with_exclude(mut self, pattern: Pattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    pub fn with_step(mut self, step: TransformStep) -> Self {
        self.transform_chain.push(step);
        self
    }

    pub fn with_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = Some(module_type);
        self
    }

    pub fn with_parser(mut self, parser: Value) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn with_enforce(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }

    /// Whether this rule's conditions accept `path`.
    ///
    /// A rule without `test` patterns accepts any file its `include` and
    /// `exclude` constraints allow.
    pub fn accepts(&self, path: &Path) -> bool {
        let name = path.to_string_lossy();

        let tested = self.test.is_empty() || self.test.iter().any(|p| p.matches(&name));
        let included = self
            .include
            .as_ref()
            .is_none_or(|root| path.starts_with(root));
        let excluded = self.exclude.iter().any(|p| p.matches(&name));

        tested && included && !excluded
    }

    /// Loader names of the transform chain, in application order.
    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.transform_chain.iter().map(|step| step.loader.as_str())
    }
}

/// One step of a transform chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStep {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl TransformStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// Emitted as a file or inlined as a data URL depending on size
    Asset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Run before every other rule matching the same file
    Pre,
}
