//! Tag refs and ref-path conventions

/// Resolved target of a git ref: the object SHA plus its type
/// (`commit` for branch heads, `tag` for annotated tag objects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    pub sha: String,
    pub object_type: String,
}

impl ResolvedRef {
    pub fn new(sha: impl Into<String>, object_type: impl Into<String>) -> Self {
        ResolvedRef {
            sha: sha.into(),
            object_type: object_type.into(),
        }
    }

    pub fn commit(sha: impl Into<String>) -> Self {
        ResolvedRef::new(sha, "commit")
    }
}

/// Ref path used to look up a tag, e.g. `tags/v1.0`.
pub fn tag_lookup_path(tag: &str) -> String {
    format!("tags/{tag}")
}

/// Fully qualified ref created for a tag, e.g. `refs/tags/v1.0`.
pub fn tag_ref_path(tag: &str) -> String {
    format!("refs/tags/{tag}")
}

/// Message recorded on created annotated tag objects.
pub fn tag_message(tag: &str) -> String {
    format!("Version {tag}")
}

/// Deduplicate a tag request, keeping the first occurrence of each name so
/// display order follows the caller's.
pub fn unique_tags(tags: &[String]) -> Vec<String> {
    let mut unique = Vec::new();
    for tag in tags {
        if !unique.contains(tag) {
            unique.push(tag.clone());
        }
    }
    unique
}
