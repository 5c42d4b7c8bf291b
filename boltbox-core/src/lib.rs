//! boltbox core library
//!
//! Shared types and external-tool plumbing for the boltbox development
//! environment CLI. The wrapper owns no protocol or orchestration logic of
//! its own: this crate knows how to find the external tools, assemble the
//! command strings handed to them, and mark directories as initialized
//! environments.

pub mod embedded;
pub mod error;
pub mod exec;
pub mod network;
pub mod paths;
pub mod repos;
pub mod tools;

// Re-export commonly used items
pub use error::{BoltboxError, Result};
pub use network::Network;
pub use repos::{CloneProtocol, SourceRepo, GITHUB_ORG, REPOS};
