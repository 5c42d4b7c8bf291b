//! Error types for boltbox.
//!
//! All errors use `thiserror` for ergonomic error handling and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for boltbox operations.
pub type Result<T> = std::result::Result<T, BoltboxError>;

/// Main error type for boltbox.
#[derive(Error, Debug)]
pub enum BoltboxError {
    // Host dependency errors
    #[error("required tool not found: {tool}\nTo install it: {hint}")]
    MissingTool { tool: &'static str, hint: &'static str },

    #[error("failed to run {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    // Environment errors
    #[error("not a boltbox environment: {path:?} (run `boltbox init` first)")]
    NotAnEnvironment { path: PathBuf },

    #[error("target directory is not empty: {path:?}")]
    TargetNotEmpty { path: PathBuf },

    // Validation errors
    #[error("unknown network: {value} (expected mainnet, testnet, regtest or simnet)")]
    UnknownNetwork { value: String },

    // Checkout errors
    #[error("failed to clone {repo}: git exited with status {status}")]
    CloneFailed { repo: String, status: i32 },

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
