//! `packsmith defaults`: print what a session would start from.

use packsmith_config::{EffectiveOptions, merge};

use crate::cli::DefaultsArgs;
use crate::commands::session;
use crate::error::Result;

pub fn execute(args: DefaultsArgs) -> Result<()> {
    let env = session::environment(&args.session)?;
    let recipe = session::resolve_recipe(&args.session, &env.project_root)?;

    if args.recipe {
        print!("{}", recipe.to_toml()?);
        return Ok(());
    }

    let options = merge(EffectiveOptions::baseline(&env), recipe.options);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
