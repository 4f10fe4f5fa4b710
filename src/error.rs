//! Error types for orgtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the orgtag application
#[derive(Debug, Error)]
pub enum OrgtagError {
    #[error("no teams matching [{requested}] found in org {org}")]
    NoTeamsFound { org: String, requested: String },

    #[error("no repositories found for the matched teams in org {org}")]
    NoRepositoriesFound { org: String },

    #[error("all target repositories already carry the requested tags -- nothing to do")]
    NothingToDo,

    #[error("{failures} tag operation(s) failed; see summary above")]
    TaggingIncomplete { failures: usize },

    #[error("no access token in {0}; pass --token or set GITHUB_TOKEN")]
    TokenNotFound(PathBuf),

    #[error("default branch {branch} of {repo} has no head ref")]
    MissingDefaultBranch { repo: String, branch: String },

    #[error("no entry for {repo} in the build manifest")]
    MissingManifestProduct { repo: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("identity error: {0}")]
    Identity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl OrgtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            OrgtagError::NoTeamsFound { .. } | OrgtagError::NoRepositoriesFound { .. } => 2,
            OrgtagError::NothingToDo => 3,
            OrgtagError::TaggingIncomplete { .. } => 4,
            _ => 1,
        }
    }
}

/// Result type using OrgtagError
pub type Result<T> = std::result::Result<T, OrgtagError>;
