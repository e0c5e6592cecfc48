//! Trailing whitespace linter and fixer.
//!
//! Every line of a checked file is right-stripped of spaces, tabs and line
//! terminators and re-terminated with a single `\n`. A file is dirty when
//! that changes its bytes, which also covers CRLF endings and a missing
//! final newline.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use walkdir::WalkDir;

use crate::config::WhitespaceConfig;
use crate::error::Result;
use crate::git::Stager;
use crate::warning::MaintenanceWarning;

/// Outcome of a whitespace run
#[derive(Debug, Clone, Default)]
pub struct WhitespaceReport {
    /// Files that had trailing whitespace (fixed unless `check_only`)
    pub dirty: Vec<PathBuf>,
    /// Number of files checked
    pub total: usize,
    pub elapsed: Duration,
    pub check_only: bool,
    pub warnings: Vec<MaintenanceWarning>,
}

impl WhitespaceReport {
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Strip trailing whitespace from every line
pub fn normalize(content: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(content.len() + 1);
    for line in content.split_inclusive(|&b| b == b'\n') {
        let end = line
            .iter()
            .rposition(|&b| !matches!(b, b'\n' | b'\r' | b' ' | b'\t'))
            .map_or(0, |idx| idx + 1);
        output.extend_from_slice(&line[..end]);
        output.push(b'\n');
    }
    output
}

/// Collect the files to check.
///
/// With no explicit `paths`, this is every matching regular file directly
/// in `root` plus the configured paths. A path naming a file is always
/// checked; directories are walked without following symlinks, pruning
/// `skip_dirs`, and only matching file names are kept. A file reached more
/// than once is listed once, at its first position.
pub fn collect_files(
    root: &Path,
    config: &WhitespaceConfig,
    paths: &[PathBuf],
    warnings: &mut Vec<MaintenanceWarning>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let paths: Vec<PathBuf> = if paths.is_empty() {
        if let Ok(entries) = fs::read_dir(root) {
            let mut top_level: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
                .filter(|entry| config.matches_file_name(&entry.file_name().to_string_lossy()))
                .map(|entry| entry.path())
                .collect();
            top_level.sort();
            files.extend(top_level);
        }
        config.paths.iter().map(|p| root.join(p)).collect()
    } else {
        paths.iter().map(|p| root.join(p)).collect()
    };

    for path in paths {
        if path.is_file() {
            files.push(path);
            continue;
        }
        if !path.is_dir() {
            continue;
        }

        let walker = WalkDir::new(&path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !(e.depth() > 0
                    && e.file_type().is_dir()
                    && config
                        .skip_dirs
                        .iter()
                        .any(|skip| e.file_name().to_string_lossy() == skip.as_str()))
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file()
                        && config.matches_file_name(&entry.file_name().to_string_lossy())
                    {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => warnings.push(MaintenanceWarning::FileCheckFailed {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| path.clone()),
                    reason: e.to_string(),
                }),
            }
        }
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(file.clone()));
    files
}

/// Check, and unless `check_only` fix, a single file.
///
/// Returns whether the file had trailing whitespace. Fixed files are
/// staged when a stager is given.
pub fn process_file(path: &Path, check_only: bool, stager: Option<&dyn Stager>) -> Result<bool> {
    let content = fs::read(path)?;
    let normalized = normalize(&content);
    if normalized == content {
        return Ok(false);
    }

    if !check_only {
        fs::write(path, &normalized)?;
        if let Some(stager) = stager {
            stager.stage(path)?;
        }
    }

    Ok(true)
}

/// Run the linter over the project rooted at `root`.
///
/// Per-file failures are collected as warnings and do not stop the run.
/// `on_dirty` is called for each dirty file once it has been handled.
pub fn run(
    root: &Path,
    config: &WhitespaceConfig,
    paths: &[PathBuf],
    check_only: bool,
    stager: Option<&dyn Stager>,
    mut on_dirty: impl FnMut(&Path),
) -> WhitespaceReport {
    let start = Instant::now();
    let mut report = WhitespaceReport {
        check_only,
        ..WhitespaceReport::default()
    };

    let files = collect_files(root, config, paths, &mut report.warnings);
    report.total = files.len();

    for file in files {
        match process_file(&file, check_only, stager) {
            Ok(true) => {
                on_dirty(&file);
                report.dirty.push(file);
            }
            Ok(false) => {}
            Err(e) => report.warnings.push(MaintenanceWarning::FileCheckFailed {
                path: file,
                reason: e.to_string(),
            }),
        }
    }

    report.elapsed = start.elapsed();
    report
}
