//! Tagger identity recorded on created tag objects

use chrono::Utc;
use serde::Serialize;

/// Name, email and timestamp attached to every tag object created in a run.
///
/// Constructed once before tagging begins; all tags of a run carry the same
/// identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggerIdentity {
    pub name: String,
    pub email: String,
    pub date: String,
}

impl TaggerIdentity {
    /// Create an identity stamped with the current time.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        TaggerIdentity {
            name: name.into(),
            email: email.into(),
            date: current_timestamp(),
        }
    }

    pub fn with_date(
        name: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        TaggerIdentity {
            name: name.into(),
            email: email.into(),
            date: date.into(),
        }
    }
}

/// Current time as an ISO-8601 UTC string with whole-second precision,
/// the format the provider expects on tag objects.
fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
