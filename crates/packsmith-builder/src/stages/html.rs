use packsmith_config::EffectiveOptions;
use std::path::PathBuf;

use crate::plugin::{HtmlMinify, HtmlOptions, HtmlPluginOptions, PluginDescriptor};
use crate::stages::{Stage, StageSink};

/// One HTML page generated from a template.
///
/// Caller options are layered over `inject: true` and the given template.
/// Production builds then force the full minification switch set. The
/// template path is not checked here; see [`crate::validation`].
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlStage {
    template: PathBuf,
    options: HtmlOptions,
}

impl HtmlStage {
    pub fn new(template: impl Into<PathBuf>, options: Option<HtmlOptions>) -> Self {
        Self {
            template: template.into(),
            options: options.unwrap_or_default(),
        }
    }

    pub fn resolve(&self, production: bool) -> HtmlPluginOptions {
        let HtmlOptions {
            inject,
            template,
            mut extra,
        } = self.options.clone();

        // Keys with a typed slot must not be forwarded a second time.
        let extra_inject = extra.remove("inject").and_then(|value| value.as_bool());
        let extra_template = extra
            .remove("template")
            .and_then(|value| value.as_str().map(PathBuf::from));

        let minify = if production {
            extra.remove("minify");
            Some(HtmlMinify::all())
        } else {
            None
        };

        HtmlPluginOptions {
            inject: inject.or(extra_inject).unwrap_or(true),
            template: template
                .or(extra_template)
                .unwrap_or_else(|| self.template.clone()),
            minify,
            extra,
        }
    }
}

impl Stage for HtmlStage {
    fn name(&self) -> &'static str {
        "html"
    }

    fn repeatable(&self) -> bool {
        true
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        sink.plugin(PluginDescriptor::Html(self.resolve(options.production)));
    }
}
