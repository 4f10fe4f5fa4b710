//! Tagger identity from explicit flags or git configuration

use crate::domain::TaggerIdentity;
use crate::error::{OrgtagError, Result};
use std::process::Command;
use tracing::debug;

/// Build the run's tagger identity.
///
/// Explicit values win; otherwise `git config user.name` / `user.email`
/// are consulted. Fails when neither source yields a value.
pub fn resolve_identity(name: Option<&str>, email: Option<&str>) -> Result<TaggerIdentity> {
    let name = match name {
        Some(name) => name.to_string(),
        None => git_config_value("user.name").ok_or_else(|| {
            OrgtagError::Identity("unable to determine a tagger name; pass --tagger".to_string())
        })?,
    };

    let email = match email {
        Some(email) => email.to_string(),
        None => git_config_value("user.email").ok_or_else(|| {
            OrgtagError::Identity("unable to determine a tagger email; pass --email".to_string())
        })?,
    };

    debug!("tagger is {name} <{email}>");
    Ok(TaggerIdentity::new(name, email))
}

/// Read a value from git configuration, `None` when unset or git is absent.
fn git_config_value(key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_skip_git_config() {
        let identity = resolve_identity(Some("Jane Doe"), Some("jane@example.org")).unwrap();
        assert_eq!(identity.name, "Jane Doe");
        assert_eq!(identity.email, "jane@example.org");
    }

    #[test]
    fn test_unset_git_key_is_none() {
        assert_eq!(git_config_value("orgtag.doesnotexist"), None);
    }
}
