//! Provider traits over the hosting service
//!
//! The application layer is generic over these so tests can substitute
//! in-memory fakes for the live client.

use crate::domain::{Repository, ResolvedRef, TaggerIdentity, Team};
use crate::error::Result;

/// Organization-level queries.
pub trait OrgProvider {
    /// All teams of the organization.
    fn list_teams(&self, org: &str) -> Result<Vec<Team>>;
}

/// Team-level queries.
pub trait TeamProvider {
    /// Repositories the team grants access to.
    fn list_team_repos(&self, org: &str, team: &Team) -> Result<Vec<Repository>>;

    /// Teams associated with a repository.
    fn list_repo_teams(&self, full_name: &str) -> Result<Vec<Team>>;
}

/// Git ref reads and tag writes on a single repository.
pub trait RefProvider {
    /// Look up a ref such as `heads/main` or `tags/v1.0`.
    ///
    /// `Ok(None)` means the ref does not exist. Transport and authorization
    /// failures are errors, never `None`.
    fn get_ref(&self, repo: &Repository, ref_path: &str) -> Result<Option<ResolvedRef>>;

    /// Create an annotated tag object and return its SHA.
    fn create_tag_object(
        &self,
        repo: &Repository,
        tag: &str,
        message: &str,
        target: &ResolvedRef,
        tagger: &TaggerIdentity,
    ) -> Result<String>;

    /// Create a fully qualified ref (`refs/tags/{tag}`) pointing at `sha`.
    fn create_ref(&self, repo: &Repository, ref_path: &str, sha: &str) -> Result<()>;
}
