use crate::error::{DocVersionsError, Result};
use crate::git::Stager;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock stager for testing without an actual git repository
pub struct MockStager {
    staged: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl MockStager {
    /// Create a stager that accepts every path
    pub fn new() -> Self {
        MockStager {
            staged: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a stager whose every call fails
    pub fn failing() -> Self {
        MockStager {
            staged: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Paths staged so far, in call order
    pub fn staged(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }
}

impl Default for MockStager {
    fn default() -> Self {
        Self::new()
    }
}

impl Stager for MockStager {
    fn stage(&self, path: &Path) -> Result<()> {
        if self.fail {
            return Err(DocVersionsError::Git(git2::Error::from_str(&format!(
                "mock refused to stage {}",
                path.display()
            ))));
        }
        self.staged.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_stager_records_paths() {
        let stager = MockStager::new();
        stager.stage(Path::new("a.md")).unwrap();
        stager.stage(Path::new("b.md")).unwrap();
        assert_eq!(
            stager.staged(),
            vec![PathBuf::from("a.md"), PathBuf::from("b.md")]
        );
    }

    #[test]
    fn test_mock_stager_failing() {
        let stager = MockStager::failing();
        assert!(stager.stage(Path::new("a.md")).is_err());
        assert!(stager.staged().is_empty());
    }

    #[test]
    fn test_mock_stager_default() {
        assert!(MockStager::default().staged().is_empty());
    }
}
