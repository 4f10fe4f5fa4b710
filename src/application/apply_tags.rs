//! Tag application

use crate::domain::tag::{tag_message, tag_ref_path};
use crate::domain::{Reconciliation, Repository, ResolvedRef, TaggerIdentity};
use crate::error::{OrgtagError, Result};
use crate::infrastructure::{BuildManifest, RefProvider};
use tracing::debug;

/// Where the tag target SHA of each repository comes from.
#[derive(Debug, Clone, Copy)]
pub enum TargetSource<'a> {
    /// The current head of the repository's default branch.
    DefaultBranchHead,
    /// The SHA recorded for the repository's product in a build manifest.
    Manifest(&'a BuildManifest),
}

/// One tag that was created, or would be created in a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTag {
    pub repo: String,
    pub tag: String,
    pub sha: String,
}

/// One unit of work that failed. `tag == None` means the repository-level
/// target resolution failed and none of its tags were attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFailure {
    pub repo: String,
    pub tag: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReport {
    pub created: Vec<CreatedTag>,
    pub failures: Vec<TagFailure>,
    pub dry_run: bool,
}

impl TagReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create every missing tag, isolating failures per repository and per
/// (repository, tag) pair so the batch always runs to completion.
///
/// The target object is resolved once per repository and reused for all of
/// its tags; every tag created in one pass points at the same SHA even if
/// the branch moves meanwhile. In dry-run mode no write is performed and
/// the report lists exactly what a real run would create.
pub fn apply_missing_tags<P: RefProvider>(
    provider: &P,
    reconciliation: &Reconciliation,
    target: TargetSource<'_>,
    tagger: &TaggerIdentity,
    dry_run: bool,
) -> TagReport {
    let mut report = TagReport {
        dry_run,
        ..TagReport::default()
    };

    for entry in &reconciliation.entries {
        let repo = &entry.repo;

        let resolved = match resolve_target(provider, repo, target) {
            Ok(resolved) => resolved,
            Err(e) => {
                report.failures.push(TagFailure {
                    repo: repo.full_name.clone(),
                    tag: None,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        debug!(
            "tagging {} at {} ({})",
            repo.full_name, resolved.sha, resolved.object_type
        );

        for tag in &entry.tags {
            if dry_run {
                debug!("  adding tag {tag} (noop)");
                report.created.push(CreatedTag {
                    repo: repo.full_name.clone(),
                    tag: tag.clone(),
                    sha: resolved.sha.clone(),
                });
                continue;
            }

            match create_tag(provider, repo, tag, &resolved, tagger) {
                Ok(()) => report.created.push(CreatedTag {
                    repo: repo.full_name.clone(),
                    tag: tag.clone(),
                    sha: resolved.sha.clone(),
                }),
                Err(e) => report.failures.push(TagFailure {
                    repo: repo.full_name.clone(),
                    tag: Some(tag.clone()),
                    reason: e.to_string(),
                }),
            }
        }
    }

    report
}

fn resolve_target<P: RefProvider>(
    provider: &P,
    repo: &Repository,
    target: TargetSource<'_>,
) -> Result<ResolvedRef> {
    match target {
        TargetSource::DefaultBranchHead => provider
            .get_ref(repo, &repo.head_ref_path())?
            .ok_or_else(|| OrgtagError::MissingDefaultBranch {
                repo: repo.full_name.clone(),
                branch: repo.default_branch.clone(),
            }),
        TargetSource::Manifest(manifest) => manifest
            .product(&repo.name)
            .map(|entry| ResolvedRef::commit(entry.sha.clone()))
            .ok_or_else(|| OrgtagError::MissingManifestProduct {
                repo: repo.full_name.clone(),
            }),
    }
}

fn create_tag<P: RefProvider>(
    provider: &P,
    repo: &Repository,
    tag: &str,
    target: &ResolvedRef,
    tagger: &TaggerIdentity,
) -> Result<()> {
    debug!("  adding tag {tag}");
    let tag_sha = provider.create_tag_object(repo, tag, &tag_message(tag), target, tagger)?;
    provider.create_ref(repo, &tag_ref_path(tag), &tag_sha)
}
