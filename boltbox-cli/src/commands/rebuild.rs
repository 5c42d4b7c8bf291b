//! `boltbox rebuild` command - rebuild one service container.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use colored::Colorize;
use std::path::Path;

/// Rebuild a service image and recreate its container, without touching the
/// services that depend on it.
pub fn rebuild(env_dir: &Path, service: &str) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    println!("{} Rebuilding {}", "→".cyan().bold(), service.bold());

    let code = exec::vm_exec(env_dir, &exec::compose_command(&format!("build {}", service)))?;
    if code != 0 {
        return Ok(code);
    }

    let code = exec::vm_exec(
        env_dir,
        &exec::compose_command(&format!("up -d --no-deps {}", service)),
    )?;
    if code == 0 {
        println!("{} {} rebuilt and restarted", "✓".green().bold(), service.bold());
    }
    Ok(code)
}
