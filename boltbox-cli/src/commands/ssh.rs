//! `boltbox ssh` command - interactive shell in the VM.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Hand the terminal to `vagrant ssh`.
pub fn ssh(env_dir: &Path) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    Ok(exec::vagrant(env_dir, &["ssh"], &[])?)
}
