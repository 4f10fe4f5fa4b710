//! Reconciliation result: which requested tags each repository is missing

use crate::domain::Repository;

/// Missing tags for a single repository, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTags {
    pub repo: Repository,
    pub tags: Vec<String>,
}

/// Outcome of comparing the requested tags against each repository.
///
/// Repositories with nothing missing appear only in `fully_tagged`;
/// `entries` preserves the order repositories were resolved in. The result
/// is recomputed fresh each run, nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub entries: Vec<MissingTags>,
    pub fully_tagged: Vec<String>,
}

impl Reconciliation {
    /// True when no repository is missing any requested tag.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Missing tags for a repository, or `None` when it is fully tagged.
    pub fn missing_for(&self, full_name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.repo.full_name == full_name)
            .map(|e| e.tags.as_slice())
    }

    /// Total number of (repository, tag) pairs that need a tag created.
    pub fn total_missing(&self) -> usize {
        self.entries.iter().map(|e| e.tags.len()).sum()
    }
}
