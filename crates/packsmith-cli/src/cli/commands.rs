use clap::{Args, Subcommand};
use std::path::PathBuf;

use packsmith_config::{Overrides, StageSelection};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a configuration snapshot
    ///
    /// Loads the project recipe, applies the enabled stages in order
    /// (typescript, styles, scripts, assets, manifest, then html pages) and
    /// writes the snapshot as JSON to stdout or to --out.
    Build(BuildArgs),

    /// Assemble a snapshot and validate it
    ///
    /// Fails when an entry point or html template does not exist on disk.
    Check(CheckArgs),

    /// Print the effective options
    ///
    /// Shows the merged option set a session would start from, or with
    /// --recipe the resolved project recipe as packsmith.toml text.
    Defaults(DefaultsArgs),
}

/// Recipe, stage and option flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Recipe file (packsmith.toml, package.json or a .json recipe)
    ///
    /// When omitted, packsmith.toml and then the `packsmith` field of
    /// package.json in the current directory are used, if present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable the TypeScript stage
    #[arg(long)]
    pub typescript: bool,

    /// Enable the stylesheet stage (css, scss, less)
    #[arg(long)]
    pub styles: bool,

    /// Enable the JavaScript stage
    #[arg(long)]
    pub scripts: bool,

    /// Enable the image asset stage
    #[arg(long)]
    pub assets: bool,

    /// Enable the asset manifest stage
    #[arg(long)]
    pub manifest: bool,

    /// Generate an HTML page from a template (repeatable)
    #[arg(long = "html", value_name = "TEMPLATE")]
    pub html: Vec<PathBuf>,

    /// Build for production
    ///
    /// Also implied by NODE_ENV=production.
    #[arg(long)]
    pub production: bool,

    /// Running under the dev server
    #[arg(long)]
    pub serve: bool,

    /// Running in watch mode
    #[arg(long)]
    pub watch: bool,

    /// Source directory
    #[arg(long, value_name = "DIR")]
    pub src_path: Option<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub dest_path: Option<PathBuf>,

    /// Public URL prefix of emitted files
    #[arg(long, value_name = "URL")]
    pub public_path: Option<String>,

    /// Entry point (repeatable, replaces the recipe's entries)
    #[arg(long = "entry", value_name = "FILE")]
    pub entry: Vec<PathBuf>,
}

impl SessionArgs {
    /// Stages switched on by flags.
    pub fn stages(&self) -> StageSelection {
        StageSelection {
            typescript: self.typescript,
            styles: self.styles,
            scripts: self.scripts,
            assets: self.assets,
            manifest: self.manifest,
        }
    }

    /// Option overrides given on the command line.
    ///
    /// `--production` only ever turns production on; leaving it off defers
    /// to the recipe and the environment.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            src_path: self.src_path.clone(),
            dest_path: self.dest_path.clone(),
            public_path: self.public_path.clone(),
            production: self.production.then_some(true),
            entry_point: (!self.entry.is_empty()).then(|| self.entry.clone()),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Write the snapshot to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Args, Debug)]
pub struct DefaultsArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the resolved recipe as packsmith.toml text
    #[arg(long)]
    pub recipe: bool,
}
