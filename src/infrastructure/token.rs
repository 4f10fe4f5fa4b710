//! Access token lookup
//!
//! Resolution order: explicit `--token` value, then the `GITHUB_TOKEN`
//! environment variable, then the first line of the token file.

use crate::error::{OrgtagError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Resolve the API token or fail with a setup error.
pub fn resolve_token(token: Option<&str>, token_path: &str) -> Result<String> {
    if let Some(token) = token {
        return Ok(token.to_string());
    }

    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            debug!("using token from {TOKEN_ENV}");
            return Ok(token.trim().to_string());
        }
    }

    let path = expand_home(token_path);
    let contents = fs::read_to_string(&path).map_err(|_| OrgtagError::TokenNotFound(path.clone()))?;

    let token = contents.lines().next().unwrap_or("").trim();
    if token.is_empty() {
        return Err(OrgtagError::TokenNotFound(path));
    }

    debug!("using token from {}", path.display());
    Ok(token.to_string())
}

/// Expand a leading `~/` against the HOME directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_explicit_token_wins() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(TOKEN_ENV);
        std::env::set_var(TOKEN_ENV, "env-token");

        let token = resolve_token(Some("literal-token"), "/nonexistent").unwrap();
        assert_eq!(token, "literal-token");
    }

    #[test]
    fn test_env_token_used_when_set() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(TOKEN_ENV);
        std::env::set_var(TOKEN_ENV, "env-token");

        let token = resolve_token(None, "/nonexistent").unwrap();
        assert_eq!(token, "env-token");
    }

    #[test]
    fn test_token_file_first_line_trimmed() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(TOKEN_ENV);
        std::env::remove_var(TOKEN_ENV);

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");
        fs::write(&path, "  file-token  \nsecond line\n").unwrap();

        let token = resolve_token(None, path.to_str().unwrap()).unwrap();
        assert_eq!(token, "file-token");
    }

    #[test]
    fn test_missing_token_file_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(TOKEN_ENV);
        std::env::remove_var(TOKEN_ENV);

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent");

        let result = resolve_token(None, path.to_str().unwrap());
        match result.unwrap_err() {
            OrgtagError::TokenNotFound(p) => assert_eq!(p, path),
            other => panic!("expected TokenNotFound, got {other}"),
        }
    }

    #[test]
    fn test_empty_token_file_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(TOKEN_ENV);
        std::env::remove_var(TOKEN_ENV);

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");
        fs::write(&path, "\n").unwrap();

        assert!(resolve_token(None, path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_expand_home() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("HOME");
        std::env::set_var("HOME", "/home/jane");

        assert_eq!(expand_home("~/.orgtag_token"), PathBuf::from("/home/jane/.orgtag_token"));
        assert_eq!(expand_home("/etc/token"), PathBuf::from("/etc/token"));
    }
}
