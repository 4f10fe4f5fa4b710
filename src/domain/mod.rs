//! Domain layer - Business logic and domain models

pub mod identity;
pub mod reconcile;
pub mod repo;
pub mod tag;

pub use identity::TaggerIdentity;
pub use reconcile::{MissingTags, Reconciliation};
pub use repo::{Repository, Team};
pub use tag::ResolvedRef;
