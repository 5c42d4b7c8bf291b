//! `boltbox app` command - the application's own CLI.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Invoke the application CLI inside the `app` container.
pub fn app(env_dir: &Path, args: &[String]) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    Ok(exec::vm_exec(env_dir, &exec::compose_exec("app", "app", args))?)
}
