//! `boltbox destroy` command - delete the development VM.

use anyhow::Result;
use boltbox_core::{exec, paths, tools};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Destroy the VM and its disk. The cloned sources and the environment
/// files stay on the host.
pub fn destroy(env_dir: &Path, force: bool) -> Result<i32> {
    paths::require_environment(env_dir)?;
    tools::VAGRANT.require()?;

    if !force {
        print!(
            "{} Destroy the development VM? The chain state inside it is lost. [y/N]: ",
            "⚠".yellow().bold()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(0);
        }
    }

    let code = exec::vagrant(env_dir, &["destroy", "--force"], &[])?;
    if code == 0 {
        println!("{} VM destroyed", "✓".green().bold());
    }
    Ok(code)
}
