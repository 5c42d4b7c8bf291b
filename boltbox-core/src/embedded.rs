//! Embedded environment files.
//!
//! The VM descriptor and the compose overlay are baked into the binary at
//! compile time and copied verbatim into the environment directory by
//! `boltbox init`. The wrapper never generates or edits them.

use crate::error::{BoltboxError, Result};
use crate::paths;
use std::fs;
use std::path::Path;
use tracing::debug;

/// VM descriptor consumed by Vagrant.
pub const DESCRIPTOR: &str = include_str!("../assets/Vagrantfile");

/// Development overlay merged by docker-compose inside the VM.
pub const OVERLAY: &str = include_str!("../assets/docker-compose.override.yml");

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| BoltboxError::Io { path: path.to_path_buf(), source: e })
}

/// Copy the descriptor and overlay into `dir` and create the sentinel,
/// marking the directory as an initialized environment.
pub fn write_environment_files(dir: &Path) -> Result<()> {
    write(&dir.join(paths::DESCRIPTOR_FILE), DESCRIPTOR)?;
    write(&dir.join(paths::OVERLAY_FILE), OVERLAY)?;
    write(&paths::sentinel_path(dir), "")?;
    debug!(dir = %dir.display(), "environment files written");
    Ok(())
}
