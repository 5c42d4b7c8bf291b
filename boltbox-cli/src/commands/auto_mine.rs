//! `boltbox auto-mine` command - periodic block generation.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Mine one block on a fixed interval until interrupted.
///
/// Only useful on regtest/simnet, where the node mines its own chain. A
/// failing mine (node still starting, wrong network) is transient: warn and
/// keep the loop alive.
pub fn auto_mine(env_dir: &Path, interval_seconds: u64) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    println!(
        "{} Mining a block every {}s (ctrl-c to stop)",
        "⛏".cyan().bold(),
        interval_seconds
    );

    let command =
        exec::compose_exec("bitcoind", "bitcoin-cli", &["-generate".to_string(), "1".to_string()]);

    loop {
        let code = exec::vm_exec(env_dir, &command)?;
        if code != 0 {
            warn!(code, "block generation failed; retrying next interval");
        }
        std::thread::sleep(Duration::from_secs(interval_seconds));
    }
}
