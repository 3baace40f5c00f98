use packsmith_config::EffectiveOptions;

use crate::pattern::{Pattern, SCRIPT, VENDOR_DIRS};
use crate::rule::{Enforce, RuleDescriptor, TransformStep};
use crate::stages::{Stage, StageSink};

/// Plain JavaScript sources under the source path.
///
/// Also registers a source-map pre-loader so maps shipped with the sources
/// are picked up before any other rule runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptsStage;

impl Stage for ScriptsStage {
    fn name(&self) -> &'static str {
        "scripts"
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        sink.pre_rule(
            RuleDescriptor::new()
                .with_test(Pattern::builtin(SCRIPT))
                .with_include(&options.src_path)
                .with_step(TransformStep::new("source-map-loader"))
                .with_enforce(Enforce::Pre),
        );

        sink.rule(
            RuleDescriptor::new()
                .with_test(Pattern::builtin(SCRIPT))
                .with_include(&options.src_path)
                .with_exclude(Pattern::builtin(VENDOR_DIRS))
                .with_step(TransformStep::new("babel-loader")),
        );
    }
}
