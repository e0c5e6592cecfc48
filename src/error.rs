use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for doc-versions operations
#[derive(Error, Debug)]
pub enum DocVersionsError {
    #[error("Invalid version: '{input}'")]
    InvalidVersion { input: String },

    #[error("Invalid version in link '{link}': '{target}'")]
    InvalidLinkTarget { link: PathBuf, target: String },

    #[error("No versions collected! Please ensure '{}' is not empty", path.display())]
    NoVersionsFound { path: PathBuf },

    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("Docs root error: {0}")]
    DocsRoot(String),

    #[error("Refusing to replace '{}': it exists and is not a symbolic link", path.display())]
    AliasNotSymlink { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in doc-versions
pub type Result<T> = std::result::Result<T, DocVersionsError>;

impl DocVersionsError {
    /// Create an invalid version error carrying the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        DocVersionsError::InvalidVersion {
            input: input.into(),
        }
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        DocVersionsError::MalformedTemplate(msg.into())
    }

    /// Create a docs root error with context
    pub fn docs_root(msg: impl Into<String>) -> Self {
        DocVersionsError::DocsRoot(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocVersionsError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_carries_input() {
        let err = DocVersionsError::invalid_version("abc");
        assert_eq!(err.to_string(), "Invalid version: 'abc'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DocVersionsError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_no_versions_names_path() {
        let err = DocVersionsError::NoVersionsFound {
            path: PathBuf::from("/srv/docs"),
        };
        assert!(err.to_string().contains("'/srv/docs' is not empty"));
    }

    #[test]
    fn test_invalid_link_target_display() {
        let err = DocVersionsError::InvalidLinkTarget {
            link: PathBuf::from("docs/latest"),
            target: "nightly".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("docs/latest"));
        assert!(msg.contains("nightly"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DocVersionsError::template("x"), "Malformed template"),
            (DocVersionsError::docs_root("x"), "Docs root error"),
            (DocVersionsError::config("x"), "Configuration error"),
            (DocVersionsError::invalid_version("x"), "Invalid version"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_alias_not_symlink_display() {
        let err = DocVersionsError::AliasNotSymlink {
            path: PathBuf::from("docs/stable"),
        };
        assert!(err.to_string().contains("not a symbolic link"));
    }
}
