//! The fixed set of source repositories that make up the stack.

/// GitHub organization all stack repositories live under.
pub const GITHUB_ORG: &str = "boltbox";

/// A repository cloned by `boltbox init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRepo {
    /// Repository name, also the checkout directory name.
    pub name: &'static str,
    /// Whether this repository is part of a production-only checkout.
    pub production: bool,
}

/// Full development checkout. Exactly one entry is the production
/// application; the rest only exist in a development environment.
pub const REPOS: [SourceRepo; 10] = [
    SourceRepo { name: "app", production: true },
    SourceRepo { name: "api", production: false },
    SourceRepo { name: "web", production: false },
    SourceRepo { name: "payments", production: false },
    SourceRepo { name: "invoices", production: false },
    SourceRepo { name: "settler", production: false },
    SourceRepo { name: "rates", production: false },
    SourceRepo { name: "notifier", production: false },
    SourceRepo { name: "admin", production: false },
    SourceRepo { name: "e2e", production: false },
];

/// Clone transport for `boltbox init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneProtocol {
    #[default]
    Https,
    Ssh,
}

impl CloneProtocol {
    /// Remote URL for a repository under [`GITHUB_ORG`].
    pub fn clone_url(&self, repo: &SourceRepo) -> String {
        match self {
            CloneProtocol::Https => {
                format!("https://github.com/{}/{}.git", GITHUB_ORG, repo.name)
            }
            CloneProtocol::Ssh => format!("git@github.com:{}/{}.git", GITHUB_ORG, repo.name),
        }
    }
}

impl std::fmt::Display for CloneProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloneProtocol::Https => write!(f, "https"),
            CloneProtocol::Ssh => write!(f, "ssh"),
        }
    }
}

/// Repositories to clone for a checkout.
pub fn checkout_set(production_only: bool) -> Vec<&'static SourceRepo> {
    REPOS.iter().filter(|r| !production_only || r.production).collect()
}
