//! `boltbox boot` command - bring the development VM up.

use anyhow::Result;
use boltbox_core::{exec, paths, tools, Network};
use colored::Colorize;
use std::path::Path;

/// Boot the VM on the selected network.
///
/// The network value is validated before Vagrant is invoked and exported to
/// the provisioner as `NETWORK`.
pub fn boot(env_dir: &Path, network: &str) -> Result<i32> {
    paths::require_environment(env_dir)?;
    let network: Network = network.parse()?;
    tools::VAGRANT.require()?;

    println!("{} Booting VM on {}", "→".cyan().bold(), network.as_str().bold());

    let code = exec::vagrant(env_dir, &["up"], &[("NETWORK", network.as_str())])?;
    if code == 0 {
        println!("{} VM is up", "✓".green().bold());
    }
    Ok(code)
}
