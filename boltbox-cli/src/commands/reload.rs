//! `boltbox reload` command - recreate the service containers.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use colored::Colorize;
use std::path::Path;

/// Re-run compose `up` so changed definitions take effect.
pub fn reload(env_dir: &Path) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    let code = exec::vm_exec(env_dir, &exec::compose_command("up -d"))?;
    if code == 0 {
        println!("{} Stack reloaded", "✓".green().bold());
    }
    Ok(code)
}
