use packsmith_config::EffectiveOptions;
use serde_json::{Value, json};

use crate::pattern::{CSS, LESS, Pattern, SCSS};
use crate::plugin::{ExtractCssOptions, PluginDescriptor};
use crate::rule::{RuleDescriptor, TransformStep};
use crate::stages::{Stage, StageSink};

/// Loader that hands compiled stylesheets to the extraction plugin.
const EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetSyntax {
    Css,
    Scss,
    Less,
}

impl StylesheetSyntax {
    /// Rule order within the stage.
    pub const ALL: [StylesheetSyntax; 3] = [
        StylesheetSyntax::Css,
        StylesheetSyntax::Scss,
        StylesheetSyntax::Less,
    ];

    fn pattern(self) -> Pattern {
        match self {
            StylesheetSyntax::Css => Pattern::builtin(CSS),
            StylesheetSyntax::Scss => Pattern::builtin(SCSS),
            StylesheetSyntax::Less => Pattern::builtin(LESS),
        }
    }

    /// Preprocessor compiling this dialect to plain CSS, if any.
    pub fn preprocessor(self) -> Option<&'static str> {
        match self {
            StylesheetSyntax::Css => None,
            StylesheetSyntax::Scss => Some("sass-loader"),
            StylesheetSyntax::Less => Some("less-loader"),
        }
    }
}

/// Plain CSS, SCSS and Less, extracted into standalone stylesheet files.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesStage;

impl StylesStage {
    fn rule(syntax: StylesheetSyntax, options: &EffectiveOptions) -> RuleDescriptor {
        let source_map = !options.production;

        let mut rule = RuleDescriptor::new()
            .with_test(syntax.pattern())
            .with_step(TransformStep::new(EXTRACT_LOADER))
            .with_step(TransformStep::new("css-loader").with_options(json!({ "sourceMap": source_map })))
            .with_step(TransformStep::new("postcss-loader").with_options(postcss_options()));

        if let Some(loader) = syntax.preprocessor() {
            rule = rule.with_step(TransformStep::new(loader).with_options(json!({ "sourceMap": source_map })));
        }

        rule
    }
}

impl Stage for StylesStage {
    fn name(&self) -> &'static str {
        "styles"
    }

    fn apply(&self, options: &EffectiveOptions, sink: &mut StageSink<'_>) {
        for syntax in StylesheetSyntax::ALL {
            sink.rule(Self::rule(syntax, options));
        }

        sink.plugin(PluginDescriptor::ExtractCss(ExtractCssOptions {
            filename: options.filenames.stylesheet.clone(),
        }));
    }
}

fn postcss_options() -> Value {
    json!({
        "postcssOptions": {
            "plugins": [
                ["postcss-preset-env", { "autoprefixer": { "flexbox": "no-2009" }, "stage": 3 }],
                "postcss-flexbugs-fixes",
                "css-mqpacker"
            ]
        }
    })
}
