//! Command templating and blocking process execution.
//!
//! Everything boltbox does ends up here: a command line is assembled as a
//! string, handed to Vagrant's remote-execution channel (`vagrant ssh -c`)
//! or run on the host directly, with stdio inherited so the external tools
//! own the terminal. Execution is synchronous and single-threaded
//! throughout.

use crate::error::{BoltboxError, Result};
use crate::paths;
use crate::tools;
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed backoff between retries of keep-alive remote commands.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Compose invocation prefix used inside the VM: base definition from the
/// application repository plus the development overlay.
fn compose_prefix() -> String {
    format!(
        "cd {} && docker-compose -f {} -f {}",
        paths::GUEST_DIR,
        paths::BASE_COMPOSE_FILE,
        paths::OVERLAY_FILE
    )
}

/// A compose subcommand line, e.g. `compose_command("ps")`.
pub fn compose_command(args: &str) -> String {
    format!("{} {}", compose_prefix(), args)
}

/// A `docker-compose exec` line running `command` inside `service`.
pub fn compose_exec(service: &str, command: &str, args: &[String]) -> String {
    let mut line = format!("{} exec -T {} {}", compose_prefix(), service, command);
    for arg in args {
        line.push(' ');
        line.push_str(&quote(arg));
    }
    line
}

/// Single-quote an argument for the remote shell.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_alphanumeric() || "-_=+./:@,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Run the VM tool from the environment directory with inherited stdio.
///
/// `envs` is exported to the process so the descriptor file can pick it up
/// (e.g. the `NETWORK` selection at boot).
pub fn vagrant(env_dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<i32> {
    let binary = tools::VAGRANT.binary();
    debug!(?args, "invoking vagrant");
    let status = Command::new(&binary)
        .args(args)
        .envs(envs.iter().copied())
        .current_dir(env_dir)
        .status()
        .map_err(|e| BoltboxError::SpawnFailed { tool: binary, source: e })?;
    Ok(status.code().unwrap_or(1))
}

/// Execute a command inside the VM over `vagrant ssh -c`, returning the
/// remote exit code.
pub fn vm_exec(env_dir: &Path, command: &str) -> Result<i32> {
    debug!(command, "executing in VM");
    vagrant(env_dir, &["ssh", "-c", command], &[])
}

/// Keep-alive variant of [`vm_exec`]: any remote exit, success or failure,
/// is treated as transient and the command is re-run after a fixed delay.
/// Runs until externally interrupted; only a failure to spawn the VM tool
/// itself propagates as an error.
pub fn vm_exec_keepalive(env_dir: &Path, command: &str) -> Result<i32> {
    loop {
        let code = vm_exec(env_dir, command)?;
        if code != 0 {
            warn!(code, "remote command exited; retrying");
        }
        std::thread::sleep(RETRY_DELAY);
    }
}
