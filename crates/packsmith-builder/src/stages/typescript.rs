use packsmith_config::EffectiveOptions;
use serde_json::json;

use crate::pattern::{Pattern, TYPESCRIPT};
use crate::plugin::{PluginDescriptor, TypeCheckOptions, TypeScriptProject};
use crate::rule::{RuleDescriptor, TransformStep};
use crate::stages::{Stage, StageSink};

/// TypeScript sources under the source path.
///
/// Files are transpiled with type errors left to the asynchronous checker
/// plugin, so a type error never blocks compilation here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptStage;

impl Stage for TypeScriptStage {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        sink.rule(
            RuleDescriptor::new()
                .with_test(Pattern::builtin(TYPESCRIPT))
                .with_include(&options.src_path)
                .with_step(TransformStep::new("babel-loader"))
                .with_step(
                    TransformStep::new("ts-loader").with_options(json!({ "transpileOnly": true })),
                ),
        );

        sink.plugin(PluginDescriptor::TypeCheck(TypeCheckOptions {
            typescript: TypeScriptProject {
                config_file: options.tsconfig_path(),
            },
        }));
    }
}
