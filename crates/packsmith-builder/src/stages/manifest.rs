use packsmith_config::EffectiveOptions;

use crate::plugin::{ManifestOptions, PluginDescriptor};
use crate::stages::{Stage, StageSink};

/// Asset manifests: every emitted file, and the initial chunks only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestStage;

impl Stage for ManifestStage {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn apply(&self, _options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        sink.plugin(PluginDescriptor::Manifest(ManifestOptions {
            file_name: "asset-manifest.json".to_string(),
            initial_only: false,
        }));
        sink.plugin(PluginDescriptor::Manifest(ManifestOptions {
            file_name: "asset-manifest-required.json".to_string(),
            initial_only: true,
        }));
    }
}
