//! `boltbox logs` command - stream service logs.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use std::path::Path;

/// Follow compose logs inside the VM.
///
/// The remote command is re-run after a fixed delay whenever it exits (a
/// restarting container drops the follow), so the stream survives service
/// restarts until the user interrupts it.
pub fn logs(env_dir: &Path, args: &[String]) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    let args = if args.is_empty() {
        "--follow --tail=100".to_string()
    } else {
        args.iter().map(|a| exec::quote(a)).collect::<Vec<_>>().join(" ")
    };

    Ok(exec::vm_exec_keepalive(env_dir, &exec::compose_command(&format!("logs {}", args)))?)
}
