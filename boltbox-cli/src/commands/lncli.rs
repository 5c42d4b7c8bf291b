//! `boltbox lncli` command - payment-channel-network RPC client passthrough.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Invoke lncli inside the `lnd` container.
pub fn lncli(env_dir: &Path, args: &[String]) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    Ok(exec::vm_exec(env_dir, &exec::compose_exec("lnd", "lncli", args))?)
}
