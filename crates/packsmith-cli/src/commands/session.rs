//! Shared recipe loading and session assembly.

use std::path::{Path, PathBuf};

use packsmith_builder::{BuildSession, BuildSnapshot, HtmlOptions};
use packsmith_config::{ConfigDiscovery, Environment, HtmlPage, Overrides, ProjectConfig};
use tracing::info;

use crate::cli::SessionArgs;
use crate::error::Result;
use crate::ui;

/// Resolve `path` against `root` unless it is already absolute.
pub(crate) fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Environment of the current process, with the serve and watch flags applied.
pub(crate) fn environment(args: &SessionArgs) -> Result<Environment> {
    let env = Environment::from_process()?
        .with_serve(args.serve)
        .with_watch(args.watch);
    Ok(env)
}

/// The project recipe with command-line flags layered on top.
///
/// Relative paths from either source are anchored at the project root.
pub(crate) fn resolve_recipe(args: &SessionArgs, root: &Path) -> Result<ProjectConfig> {
    let discovery = ConfigDiscovery::new(root);
    let recipe = match &args.config {
        Some(path) => discovery.load_from(&resolve_path(path, root))?,
        None => {
            if discovery.find().is_none() {
                ui::warning("No packsmith.toml or package.json recipe found, using defaults");
            }
            discovery.load_or_default()?
        }
    };

    let mut html = recipe.html;
    html.extend(args.html.iter().map(HtmlPage::new));

    Ok(ProjectConfig {
        options: anchor(recipe.options.layer(args.overrides()), root),
        stages: recipe.stages.union(args.stages()),
        html: html
            .into_iter()
            .map(|page| HtmlPage {
                template: resolve_path(&page.template, root),
                ..page
            })
            .collect(),
    })
}

fn anchor(overrides: Overrides, root: &Path) -> Overrides {
    Overrides {
        src_path: overrides.src_path.map(|p| resolve_path(&p, root)),
        dest_path: overrides.dest_path.map(|p| resolve_path(&p, root)),
        entry_point: overrides
            .entry_point
            .map(|entries| entries.iter().map(|p| resolve_path(p, root)).collect()),
        dev_server: overrides.dev_server.map(|mut dev_server| {
            dev_server.static_dir.directory = resolve_path(&dev_server.static_dir.directory, root);
            dev_server
        }),
        ..overrides
    }
}

/// Run every selected stage and finalize.
///
/// Stages run in a fixed order (typescript, styles, scripts, assets,
/// manifest), then one html stage per page in recipe-then-flag order.
pub(crate) fn assemble(env: &Environment, recipe: ProjectConfig) -> Result<BuildSnapshot> {
    let mut session = BuildSession::initialize(env, recipe.options);
    let stages = recipe.stages;

    if stages.typescript {
        session.enable_typescript()?;
    }
    if stages.styles {
        session.enable_styles()?;
    }
    if stages.scripts {
        session.enable_scripts()?;
    }
    if stages.assets {
        session.enable_assets()?;
    }
    if stages.manifest {
        session.enable_manifest()?;
    }

    for page in recipe.html {
        let options = HtmlOptions::from_map(page.options)?;
        session.add_html(page.template, Some(options))?;
    }

    for message in session.messages() {
        info!("{message}");
    }

    Ok(session.finalize()?)
}
