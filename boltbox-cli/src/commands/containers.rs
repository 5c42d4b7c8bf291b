//! `boltbox containers` command - list the service containers.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Show compose's view of the stack, unmodified.
pub fn containers(env_dir: &Path) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    Ok(exec::vm_exec(env_dir, &exec::compose_command("ps"))?)
}
