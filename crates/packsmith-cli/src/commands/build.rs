//! `packsmith build`: assemble a snapshot and emit it as JSON.

use std::fs;

use tracing::debug;

use crate::cli::BuildArgs;
use crate::commands::session;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: BuildArgs) -> Result<()> {
    let env = session::environment(&args.session)?;
    let recipe = session::resolve_recipe(&args.session, &env.project_root)?;
    let snapshot = session::assemble(&env, recipe)?;

    let json = if args.compact {
        serde_json::to_string(&snapshot)?
    } else {
        snapshot.to_json_pretty()?
    };

    match args.out {
        Some(out) => {
            let path = session::resolve_path(&out, &env.project_root);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| CliError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, json).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "snapshot written");
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
