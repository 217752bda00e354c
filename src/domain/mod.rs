//! Domain logic - pure version rules independent of git operations

pub mod prerelease;
pub mod version;

pub use version::{SemVer, VersionBump};
