//! Centralized path and file-name configuration for boltbox.
//!
//! Every file the wrapper touches on disk, and every path it references
//! inside the VM, goes through this module so the CLI and the command
//! templates stay consistent.

use crate::error::{BoltboxError, Result};
use std::path::{Path, PathBuf};

/// Zero-content marker that a directory is an initialized environment.
pub const SENTINEL_FILE: &str = ".boltbox";

/// VM descriptor consumed by Vagrant.
pub const DESCRIPTOR_FILE: &str = "Vagrantfile";

/// Development overlay merged over the base compose definition.
pub const OVERLAY_FILE: &str = "docker-compose.override.yml";

/// Base compose definition, shipped inside the application repository.
pub const BASE_COMPOSE_FILE: &str = "app/docker-compose.yml";

/// Where Vagrant syncs the environment directory inside the VM.
pub const GUEST_DIR: &str = "/vagrant";

/// Path of the sentinel file for an environment directory.
pub fn sentinel_path(dir: &Path) -> PathBuf {
    dir.join(SENTINEL_FILE)
}

/// Whether `dir` is an initialized environment.
pub fn is_environment(dir: &Path) -> bool {
    sentinel_path(dir).exists()
}

/// Fail unless `dir` contains the sentinel file.
pub fn require_environment(dir: &Path) -> Result<()> {
    if is_environment(dir) {
        Ok(())
    } else {
        Err(BoltboxError::NotAnEnvironment { path: dir.to_path_buf() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_detection() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_environment(dir.path()));
        assert!(require_environment(dir.path()).is_err());

        std::fs::write(sentinel_path(dir.path()), "").unwrap();
        assert!(is_environment(dir.path()));
        assert!(require_environment(dir.path()).is_ok());
    }
}
