//! `boltbox init` command - set up a development environment directory.

use anyhow::{Context, Result};
use boltbox_core::error::BoltboxError;
use boltbox_core::repos::{self, CloneProtocol};
use boltbox_core::{embedded, tools};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::process::Command;
use tabled::{settings::Style, Table, Tabled};

/// Initialize a development environment in `dir`.
///
/// Clones the stack repositories (all ten, or just the production
/// application with `production`), then copies the embedded VM descriptor
/// and compose overlay and drops the sentinel file.
pub fn init(dir: &Path, production: bool, ssh: bool) -> Result<i32> {
    let git = tools::GIT.require()?;

    if dir.exists() {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| BoltboxError::Io { path: dir.to_path_buf(), source: e })?;
        if entries.next().is_some() {
            return Err(BoltboxError::TargetNotEmpty { path: dir.to_path_buf() }.into());
        }
    } else {
        fs::create_dir_all(dir)
            .map_err(|e| BoltboxError::Io { path: dir.to_path_buf(), source: e })?;
    }

    let protocol = if ssh { CloneProtocol::Ssh } else { CloneProtocol::Https };
    let checkout = repos::checkout_set(production);

    println!(
        "{} Cloning {} repositor{} over {}",
        "→".cyan().bold(),
        checkout.len(),
        if checkout.len() == 1 { "y" } else { "ies" },
        protocol.to_string().dimmed()
    );

    let bar = ProgressBar::new(checkout.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap(),
    );

    for repo in &checkout {
        bar.set_message(repo.name);
        clone_repo(&git, dir, &protocol.clone_url(repo), repo.name)?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    embedded::write_environment_files(dir).context("Failed to write environment files")?;

    #[derive(Tabled)]
    struct RepoRow {
        #[tabled(rename = "REPOSITORY")]
        name: &'static str,
        #[tabled(rename = "REMOTE")]
        remote: String,
    }

    let rows: Vec<RepoRow> = checkout
        .iter()
        .map(|r| RepoRow { name: r.name, remote: protocol.clone_url(r) })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("{} Environment ready in {}", "✓".green().bold(), dir.display().to_string().bold());
    println!("{}", "Next: cd into it and run `boltbox boot`".dimmed());

    Ok(0)
}

fn clone_repo(git: &str, dir: &Path, url: &str, name: &str) -> Result<()> {
    let status = Command::new(git)
        .args(["clone", "--quiet", url, name])
        .current_dir(dir)
        .status()
        .map_err(|e| BoltboxError::SpawnFailed { tool: git.to_string(), source: e })?;

    if !status.success() {
        return Err(BoltboxError::CloneFailed {
            repo: name.to_string(),
            status: status.code().unwrap_or(1),
        }
        .into());
    }
    Ok(())
}
