//! Git staging abstraction layer
//!
//! The whitespace fixer stages every file it rewrites so the fix lands in
//! the next commit. Staging goes through the [Stager] trait so the fixer
//! can be exercised without a repository.
//!
//! - [repository::Git2Stager]: stages into the index of a real repository via `git2`
//! - [mock::MockStager]: records staged paths for tests
//!
//! ```rust
//! # use doc_versions::git::Stager;
//! # use std::path::Path;
//! # fn example<S: Stager>(stager: &S) -> doc_versions::Result<()> {
//! stager.stage(Path::new("docs/index.html"))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockStager;
pub use repository::Git2Stager;

use crate::error::Result;
use std::path::Path;

/// Adds changed files to the git index
pub trait Stager {
    /// Stage a single file
    ///
    /// The file is added even if it matches an ignore rule, like
    /// `git add --force`.
    ///
    /// # Arguments
    /// * `path` - Path to the file, absolute or relative to the working directory
    ///
    /// # Returns
    /// * `Ok(())` - The index was updated and written
    /// * `Err` - If the file lies outside the repository or there's a Git error
    fn stage(&self, path: &Path) -> Result<()>;
}
