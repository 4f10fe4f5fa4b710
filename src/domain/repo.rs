//! Repositories and teams as returned by the hosting provider

use serde::Deserialize;

/// A repository that is a candidate for tagging.
///
/// `full_name` (`org/name`) is the stable identity used for deduplication
/// and for the team-membership cache; repository values obtained from
/// independent queries compare equal only through it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub name: String,
    pub default_branch: String,
}

impl Repository {
    pub fn new(full_name: impl Into<String>, default_branch: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit('/')
            .next()
            .unwrap_or(full_name.as_str())
            .to_string();
        Repository {
            full_name,
            name,
            default_branch: default_branch.into(),
        }
    }

    /// Ref path of the default branch head, e.g. `heads/main`.
    pub fn head_ref_path(&self) -> String {
        format!("heads/{}", self.default_branch)
    }
}

/// A named grouping of repositories within an organization.
///
/// `slug` is the provider's URL-safe handle for the team; selection is
/// always by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub name: String,
    pub slug: String,
}

impl Team {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            slug: slug.into(),
        }
    }
}
