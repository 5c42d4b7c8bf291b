//! `boltbox run` command - execute a command inside the VM.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Run an arbitrary command in the VM from the synced environment
/// directory, propagating its exit status.
pub fn run(env_dir: &Path, command: &[String]) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    let line = format!("cd {} && {}", paths::GUEST_DIR, command.join(" "));
    Ok(exec::vm_exec(env_dir, &line)?)
}
