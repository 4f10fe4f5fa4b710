//! Infrastructure layer - Hosting-provider I/O and local environment

pub mod gitconfig;
pub mod github;
pub mod manifest;
pub mod provider;
pub mod token;

pub use gitconfig::resolve_identity;
pub use github::GithubClient;
pub use manifest::{fetch_manifest, BuildManifest, ManifestEntry};
pub use provider::{OrgProvider, RefProvider, TeamProvider};
pub use token::resolve_token;

/// User agent sent on every outgoing request.
pub(crate) const USER_AGENT: &str = concat!("orgtag/", env!("CARGO_PKG_VERSION"));
