//! Missing-tag analysis

use crate::domain::tag::tag_lookup_path;
use crate::domain::{MissingTags, Reconciliation, Repository};
use crate::error::Result;
use crate::infrastructure::RefProvider;
use tracing::debug;

/// Partition repositories by whether they already carry every requested tag.
///
/// Read-only: one ref lookup per (repository, tag). Missing tags keep the
/// caller's request order. A lookup failure propagates; absence of a tag
/// does not.
pub fn find_missing_tags<P: RefProvider>(
    provider: &P,
    repos: &[Repository],
    tags: &[String],
) -> Result<Reconciliation> {
    debug!("looking for repos without {tags:?}");

    let mut result = Reconciliation::default();

    for repo in repos {
        let mut missing = Vec::new();
        for tag in tags {
            match provider.get_ref(repo, &tag_lookup_path(tag))? {
                Some(_) => debug!("  {}: found {tag}", repo.full_name),
                None => {
                    debug!("  {}: not found {tag}", repo.full_name);
                    missing.push(tag.clone());
                }
            }
        }

        if missing.is_empty() {
            result.fully_tagged.push(repo.full_name.clone());
        } else {
            result.entries.push(MissingTags {
                repo: repo.clone(),
                tags: missing,
            });
        }
    }

    Ok(result)
}
