//! Build-manifest lookup for manifest-based tag targets
//!
//! A build manifest maps product names to the git SHA (and eups version)
//! that went into one build. Manifests are plain text, one
//! `product sha eups_version` triple per line, served by a version
//! database as `{base}/{build_id}.txt`.

use crate::error::{OrgtagError, Result};
use crate::infrastructure::USER_AGENT;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub sha: String,
    pub eups_version: String,
}

/// Parsed manifest of a single build.
#[derive(Debug, Clone, Default)]
pub struct BuildManifest {
    products: HashMap<String, ManifestEntry>,
}

impl BuildManifest {
    /// Parse manifest text, skipping comments, the `BUILD` header and
    /// blank lines.
    pub fn parse(data: &str) -> Result<Self> {
        let mut products = HashMap::new();

        for line in data.lines() {
            if line.starts_with('#') || line.starts_with("BUILD") || line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(name), Some(sha), Some(eups_version)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(OrgtagError::Config(format!(
                    "malformed manifest line: {line}"
                )));
            };

            products.insert(
                name.to_string(),
                ManifestEntry {
                    name: name.to_string(),
                    sha: sha.to_string(),
                    eups_version: eups_version.to_string(),
                },
            );
        }

        Ok(BuildManifest { products })
    }

    pub fn product(&self, name: &str) -> Option<&ManifestEntry> {
        self.products.get(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Fetch and parse the manifest for a build ID from the version database.
pub fn fetch_manifest(versiondb_url: &str, build_id: &str) -> Result<BuildManifest> {
    let url = format!("{}/{build_id}.txt", versiondb_url.trim_end_matches('/'));
    debug!("fetching build manifest: {url}");

    let http = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = http.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(OrgtagError::Api {
            status: status.as_u16(),
            message: format!("failed to fetch manifest {build_id} from {url}"),
        });
    }

    BuildManifest::parse(&response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# generated by the build system
BUILD=b1108
widget 1a2b3c4d 1.2.0
gadget 5e6f7a8b 1.2.0+1

sprocket 9c0d1e2f 2.0.0-rc1
";

    #[test]
    fn test_parse_skips_comments_header_and_blanks() {
        let manifest = BuildManifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_parse_extracts_entry_fields() {
        let manifest = BuildManifest::parse(SAMPLE).unwrap();
        let entry = manifest.product("gadget").unwrap();
        assert_eq!(entry.sha, "5e6f7a8b");
        assert_eq!(entry.eups_version, "1.2.0+1");
    }

    #[test]
    fn test_unknown_product_is_none() {
        let manifest = BuildManifest::parse(SAMPLE).unwrap();
        assert!(manifest.product("doohickey").is_none());
    }

    #[test]
    fn test_malformed_line_fails() {
        let result = BuildManifest::parse("widget only-two");
        match result.unwrap_err() {
            OrgtagError::Config(msg) => assert!(msg.contains("malformed manifest line")),
            other => panic!("expected Config error, got {other}"),
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let manifest = BuildManifest::parse("widget abc123 1.0.0 trailing junk").unwrap();
        assert_eq!(manifest.product("widget").unwrap().sha, "abc123");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = BuildManifest::parse("# nothing here\n").unwrap();
        assert!(manifest.is_empty());
    }
}
