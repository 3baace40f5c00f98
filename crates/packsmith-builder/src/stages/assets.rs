use packsmith_config::EffectiveOptions;
use serde_json::json;

use crate::pattern::{IMAGES, Pattern};
use crate::rule::{ModuleType, RuleDescriptor};
use crate::stages::{Stage, StageSink};

/// Raster images, inlined as data URLs up to the configured size limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetsStage;

impl Stage for AssetsStage {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        let rule = IMAGES
            .into_iter()
            .fold(RuleDescriptor::new(), |rule, source| {
                rule.with_test(Pattern::builtin(source))
            })
            .with_type(ModuleType::Asset)
            .with_parser(json!({
                "dataUrlCondition": { "maxSize": options.asset_inline_size_limit }
            }));

        sink.rule(rule);
    }
}
