//! Detection of the external tools boltbox delegates to.
//!
//! The wrapper never reimplements any of their behavior; it only needs to
//! know they are invokable before building command lines for them.

use crate::error::{BoltboxError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// An external tool the wrapper shells out to.
#[derive(Debug, Clone, Copy)]
pub struct ExternalTool {
    /// Binary name looked up on PATH.
    pub name: &'static str,
    /// Environment variable that overrides the binary.
    pub env_override: &'static str,
    /// Install instructions printed when the tool is missing.
    pub install_hint: &'static str,
}

/// Vagrant, the VM provisioning tool.
pub const VAGRANT: ExternalTool = ExternalTool {
    name: "vagrant",
    env_override: "BOLTBOX_VAGRANT_BIN",
    install_hint: "https://developer.hashicorp.com/vagrant/downloads",
};

/// git, used once by `boltbox init` to clone the stack repositories.
pub const GIT: ExternalTool = ExternalTool {
    name: "git",
    env_override: "BOLTBOX_GIT_BIN",
    install_hint: "`apt install git`, `brew install git`, or https://git-scm.com/downloads",
};

impl ExternalTool {
    /// Binary to invoke, honoring the environment override.
    pub fn binary(&self) -> String {
        std::env::var(self.env_override).unwrap_or_else(|_| self.name.to_string())
    }

    /// Resolve the binary, failing with install instructions if it is not
    /// invokable on this host.
    pub fn require(&self) -> Result<String> {
        let binary = self.binary();
        let found = if binary.contains('/') {
            Path::new(&binary).exists()
        } else {
            Command::new("which")
                .arg(&binary)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
        };

        if found {
            debug!(tool = self.name, binary, "external tool resolved");
            Ok(binary)
        } else {
            Err(BoltboxError::MissingTool { tool: self.name, hint: self.install_hint })
        }
    }
}
