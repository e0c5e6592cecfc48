//! Maintenance of the `latest` and `stable` documentation aliases.
//!
//! An alias is a symlink inside the docs root pointing at a version
//! directory. It is only ever moved forward: an alias already pointing at a
//! strictly newer version is left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::DocVersion;
use crate::error::{DocVersionsError, Result};

pub const LATEST_ALIAS: &str = "latest";
pub const STABLE_ALIAS: &str = "stable";

/// Development docs; never compared against and never linked
pub const DEVELOPMENT_VERSION: &str = "master";

/// What happened (or would happen, on a dry run) to a single alias
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    /// The alias did not exist and was created
    Created,
    /// The alias was re-pointed; `previous` is the old target's name
    Replaced { previous: String },
    /// The alias already points at a newer version
    KeptNewer { current: String },
}

/// Result of processing one alias
#[derive(Debug, Clone, PartialEq)]
pub struct LinkUpdate {
    pub alias: PathBuf,
    pub target: String,
    pub action: LinkAction,
}

impl LinkUpdate {
    pub fn changed(&self) -> bool {
        !matches!(self.action, LinkAction::KeptNewer { .. })
    }
}

/// Result of an alias update run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkReport {
    /// False when the requested version was the development version
    pub applicable: bool,
    pub updates: Vec<LinkUpdate>,
}

/// Point `latest`, and `stable` for stable versions, at `raw_version`.
///
/// `raw_version` is the version directory name. The development version is
/// accepted and results in no changes.
pub fn update_aliases(docs_root: &Path, raw_version: &str, dry_run: bool) -> Result<LinkReport> {
    if raw_version == DEVELOPMENT_VERSION {
        return Ok(LinkReport::default());
    }

    let version = DocVersion::parse(raw_version)?;

    let mut updates = vec![update_alias(
        docs_root,
        LATEST_ALIAS,
        raw_version,
        &version,
        dry_run,
    )?];
    if !version.is_prerelease() {
        updates.push(update_alias(
            docs_root,
            STABLE_ALIAS,
            raw_version,
            &version,
            dry_run,
        )?);
    }

    Ok(LinkReport {
        applicable: true,
        updates,
    })
}

/// Re-point a single alias at `target`, unless it already points at a
/// strictly newer version.
pub fn update_alias(
    docs_root: &Path,
    alias: &str,
    target: &str,
    version: &DocVersion,
    dry_run: bool,
) -> Result<LinkUpdate> {
    let link = docs_root.join(alias);

    let action = match current_target(&link)? {
        None => LinkAction::Created,
        Some(previous) => {
            if previous != DEVELOPMENT_VERSION {
                let current = DocVersion::parse(&previous).map_err(|_| {
                    DocVersionsError::InvalidLinkTarget {
                        link: link.clone(),
                        target: previous.clone(),
                    }
                })?;
                if current > *version {
                    return Ok(LinkUpdate {
                        alias: link,
                        target: target.to_string(),
                        action: LinkAction::KeptNewer { current: previous },
                    });
                }
            }
            LinkAction::Replaced { previous }
        }
    };

    if !dry_run {
        if matches!(action, LinkAction::Replaced { .. }) {
            remove_link(&link)?;
        }
        create_link(Path::new(target), &link)?;
    }

    Ok(LinkUpdate {
        alias: link,
        target: target.to_string(),
        action,
    })
}

/// Name of the directory an alias points at, or `None` if the alias does
/// not exist.
///
/// Chains of links are resolved to the final directory. A dangling link
/// reports its immediate target.
pub fn current_target(link: &Path) -> Result<Option<String>> {
    let metadata = match fs::symlink_metadata(link) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if !metadata.file_type().is_symlink() {
        return Err(DocVersionsError::AliasNotSymlink {
            path: link.to_path_buf(),
        });
    }

    let resolved = fs::canonicalize(link).or_else(|_| fs::read_link(link))?;
    let name = resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.to_string_lossy().into_owned());
    Ok(Some(name))
}

#[cfg(unix)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_link(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

#[cfg(windows)]
fn remove_link(link: &Path) -> io::Result<()> {
    fs::remove_dir(link)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn docs_with(dirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in dirs {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        temp
    }

    fn link_target(root: &Path, alias: &str) -> String {
        fs::read_link(root.join(alias))
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_master_is_noop() {
        let temp = docs_with(&[]);
        let report = update_aliases(temp.path(), "master", false).unwrap();
        assert!(!report.applicable);
        assert!(report.updates.is_empty());
        assert!(!temp.path().join("latest").exists());
    }

    #[test]
    fn test_invalid_version_is_fatal() {
        let temp = docs_with(&[]);
        assert!(matches!(
            update_aliases(temp.path(), "nightly", false),
            Err(DocVersionsError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_creates_missing_aliases_for_stable() {
        let temp = docs_with(&["1.0.0"]);
        let report = update_aliases(temp.path(), "1.0.0", false).unwrap();
        assert_eq!(report.updates.len(), 2);
        assert!(report
            .updates
            .iter()
            .all(|u| u.action == LinkAction::Created));
        assert_eq!(link_target(temp.path(), "latest"), "1.0.0");
        assert_eq!(link_target(temp.path(), "stable"), "1.0.0");
    }

    #[test]
    fn test_prerelease_only_moves_latest() {
        let temp = docs_with(&["1.0.0", "1.1.0.rc1"]);
        update_aliases(temp.path(), "1.0.0", false).unwrap();

        let report = update_aliases(temp.path(), "1.1.0.rc1", false).unwrap();
        assert_eq!(report.updates.len(), 1);
        assert_eq!(
            report.updates[0].action,
            LinkAction::Replaced {
                previous: "1.0.0".to_string()
            }
        );
        assert_eq!(link_target(temp.path(), "latest"), "1.1.0.rc1");
        assert_eq!(link_target(temp.path(), "stable"), "1.0.0");
    }

    #[test]
    fn test_refuses_to_move_backwards() {
        let temp = docs_with(&["1.0.0", "2.0.0"]);
        update_aliases(temp.path(), "2.0.0", false).unwrap();

        let report = update_aliases(temp.path(), "1.0.0", false).unwrap();
        assert!(report.updates.iter().all(|u| !u.changed()));
        assert_eq!(link_target(temp.path(), "latest"), "2.0.0");
        assert_eq!(link_target(temp.path(), "stable"), "2.0.0");
    }

    #[test]
    fn test_same_version_is_recreated() {
        let temp = docs_with(&["1.0.0"]);
        update_aliases(temp.path(), "1.0.0", false).unwrap();
        let report = update_aliases(temp.path(), "1.0.0", false).unwrap();
        assert!(report.updates.iter().all(|u| u.changed()));
    }

    #[test]
    fn test_master_link_is_always_replaced() {
        let temp = docs_with(&["master", "0.1.0"]);
        create_link(Path::new("master"), &temp.path().join("latest")).unwrap();
        let report = update_aliases(temp.path(), "0.1.0.dev1", false).unwrap();
        assert_eq!(
            report.updates[0].action,
            LinkAction::Replaced {
                previous: "master".to_string()
            }
        );
        assert_eq!(link_target(temp.path(), "latest"), "0.1.0.dev1");
    }

    #[test]
    fn test_invalid_link_target_is_fatal() {
        let temp = docs_with(&["garbage"]);
        create_link(Path::new("garbage"), &temp.path().join("latest")).unwrap();
        assert!(matches!(
            update_aliases(temp.path(), "1.0.0", false),
            Err(DocVersionsError::InvalidLinkTarget { .. })
        ));
    }

    #[test]
    fn test_real_directory_alias_is_refused() {
        let temp = docs_with(&["latest", "1.0.0"]);
        assert!(matches!(
            update_aliases(temp.path(), "1.0.0", false),
            Err(DocVersionsError::AliasNotSymlink { .. })
        ));
        assert!(temp.path().join("latest").is_dir());
    }

    #[test]
    fn test_dangling_link_uses_immediate_target() {
        let temp = docs_with(&["1.0.0"]);
        create_link(Path::new("0.5.0"), &temp.path().join("latest")).unwrap();
        assert_eq!(
            current_target(&temp.path().join("latest")).unwrap(),
            Some("0.5.0".to_string())
        );
        update_aliases(temp.path(), "1.0.0", false).unwrap();
        assert_eq!(link_target(temp.path(), "latest"), "1.0.0");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = docs_with(&["1.0.0"]);
        let report = update_aliases(temp.path(), "1.0.0", true).unwrap();
        assert_eq!(report.updates.len(), 2);
        assert!(fs::symlink_metadata(temp.path().join("latest")).is_err());
    }
}
