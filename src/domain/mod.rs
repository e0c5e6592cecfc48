//! Domain logic - version parsing and ordering, independent of the filesystem

pub mod catalog;
pub mod version;

pub use catalog::{CatalogEntry, VersionCatalog, VersionMetadata};
pub use version::{DocVersion, Prerelease, ReleaseRank, SortKey};
