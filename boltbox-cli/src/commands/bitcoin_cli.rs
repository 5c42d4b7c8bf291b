//! `boltbox bitcoin-cli` command - blockchain RPC client passthrough.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Invoke bitcoin-cli inside the `bitcoind` container.
pub fn bitcoin_cli(env_dir: &Path, args: &[String]) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    Ok(exec::vm_exec(env_dir, &exec::compose_exec("bitcoind", "bitcoin-cli", args))?)
}
