use crate::error::{DocVersionsError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository implementing [super::Stager]
pub struct Git2Stager {
    repo: Git2Repo,
}

impl Git2Stager {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Stager { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Stager { repo }
    }

    /// Path of `path` relative to the repository working directory
    fn relative_path(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self.repo.workdir().ok_or_else(|| {
            DocVersionsError::Git(git2::Error::from_str(
                "cannot stage files in a bare repository",
            ))
        })?;

        let workdir = workdir.canonicalize()?;
        let absolute = path.canonicalize()?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                DocVersionsError::Git(git2::Error::from_str(&format!(
                    "'{}' is outside the repository at '{}'",
                    path.display(),
                    workdir.display()
                )))
            })
    }
}

impl super::Stager for Git2Stager {
    fn stage(&self, path: &Path) -> Result<()> {
        let relative = self.relative_path(path)?;

        let mut index = self.repo.index()?;
        index.add_path(&relative)?;
        index.write()?;

        Ok(())
    }
}
