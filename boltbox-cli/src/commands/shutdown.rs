//! `boltbox shutdown` command - halt the development VM.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use colored::Colorize;
use std::path::Path;

/// Halt the VM, leaving its disk intact.
pub fn shutdown(env_dir: &Path) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    let code = exec::vagrant(env_dir, &["halt"], &[])?;
    if code == 0 {
        println!("{} VM halted", "✓".green().bold());
    }
    Ok(code)
}
