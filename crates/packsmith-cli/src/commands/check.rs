//! `packsmith check`: assemble a snapshot and validate it on disk.

use packsmith_builder::validate_fs;

use crate::cli::CheckArgs;
use crate::commands::session;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let env = session::environment(&args.session)?;
    let recipe = session::resolve_recipe(&args.session, &env.project_root)?;
    let snapshot = session::assemble(&env, recipe)?;

    validate_fs(&snapshot, &env.project_root)?;

    ui::success(&format!(
        "Configuration is valid: {} rules, {} plugins ({} mode)",
        snapshot.composite().len() + snapshot.module().pre_rules().len(),
        snapshot.plugins().len(),
        snapshot.base().mode.as_str(),
    ));
    Ok(())
}
