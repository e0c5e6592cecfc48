//! Version index generation for the documentation site.
//!
//! Every version-named directory under the docs root is collected, sorted
//! newest first, and written into the marked block of the switcher script
//! together with the latest stable version.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DocsConfig;
use crate::domain::{DocVersion, VersionCatalog};
use crate::error::{DocVersionsError, Result};
use crate::switcher;

/// Outcome of an index generation run
#[derive(Debug, Clone, PartialEq)]
pub struct IndexReport {
    /// Version directory names, newest first
    pub versions: Vec<String>,
    pub latest_stable: String,
    pub switcher_path: PathBuf,
    /// The generated block (without markers)
    pub block: String,
    /// False for dry runs
    pub written: bool,
}

/// Ensure the docs root exists and is a directory
pub fn check_docs_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(DocVersionsError::docs_root(format!(
            "'{}' does not exist!",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(DocVersionsError::docs_root(format!(
            "'{}' is not a directory!",
            root.display()
        )));
    }
    Ok(())
}

/// Collect every version directory under the docs root.
///
/// Directories are followed through symlinks; names listed in
/// `docs.ignored` are skipped. Any other directory name that is not a valid
/// version aborts the scan.
pub fn collect_versions(docs: &DocsConfig) -> Result<VersionCatalog> {
    check_docs_root(&docs.root)?;

    let mut catalog = VersionCatalog::new();
    for entry in fs::read_dir(&docs.root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name
            .to_str()
            .ok_or_else(|| DocVersionsError::invalid_version(name.to_string_lossy()))?;
        if docs.is_ignored(name) {
            continue;
        }

        catalog.insert_named(name, DocVersion::parse(name)?);
    }

    if catalog.is_empty() {
        return Err(DocVersionsError::NoVersionsFound {
            path: docs.root.clone(),
        });
    }

    Ok(catalog)
}

/// Build the switcher block for a catalog.
///
/// Versions are published under their directory names. Returns
/// `(latest_stable, block)`.
pub fn build_block(catalog: &VersionCatalog) -> Result<(String, String)> {
    let latest_stable = catalog
        .latest_stable_entry()
        .map(|entry| entry.name.clone())
        .unwrap_or_default();
    let block = switcher::render_block(&latest_stable, &catalog.to_json()?);
    Ok((latest_stable, block))
}

/// Regenerate the version index.
///
/// The switcher file is only read once versions have been collected
/// successfully, and only written when the block could be spliced in.
pub fn generate_index(docs: &DocsConfig, dry_run: bool) -> Result<IndexReport> {
    let catalog = collect_versions(docs)?;
    let (latest_stable, block) = build_block(&catalog)?;

    let switcher_path = docs.switcher_path();
    let template = fs::read_to_string(&switcher_path)?;
    let updated = switcher::splice_block(&template, &docs.markers(), &block)?;

    if !dry_run {
        fs::write(&switcher_path, updated)?;
    }

    Ok(IndexReport {
        versions: catalog.names().into_iter().map(String::from).collect(),
        latest_stable,
        switcher_path,
        block,
        written: !dry_run,
    })
}
