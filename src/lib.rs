//! orgtag - Team-based repository tagger
//!
//! Tags the default-branch head (or a build-manifest commit) of every
//! repository belonging to the requested GitHub org teams, skipping tags
//! that already exist.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::OrgtagError;
