//! Workflow orchestration for the three maintenance commands
//!
//! Keeps CLI argument parsing in main.rs and everything the commands do,
//! including operator output, here. The workflows can be called
//! programmatically without depending on clap.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::{self, Config};
use crate::git::{Git2Stager, Stager};
use crate::index::{self, IndexReport};
use crate::symlinks::{self, LinkAction, LinkReport};
use crate::ui;
use crate::warning::MaintenanceWarning;
use crate::whitespace::{self, WhitespaceReport};

/// Options shared by every command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Overrides the configured docs root
    pub docs_dir: Option<PathBuf>,
}

/// Load configuration and apply command-line overrides
pub fn resolve_config(args: &CommonArgs) -> Result<Config> {
    let mut config = config::load_config(args.config_path.as_deref())
        .context("Error loading config")?;
    if let Some(docs_dir) = &args.docs_dir {
        config.docs.root = docs_dir.clone();
    }
    Ok(config)
}

/// Regenerate the version index in the switcher script.
///
/// On a dry run the generated block is printed instead of written.
pub fn run_index(config: &Config, dry_run: bool) -> Result<IndexReport> {
    ui::display_status(&format!(
        "Collecting versions from {}",
        config.docs.root.display()
    ));

    let report = index::generate_index(&config.docs, dry_run).with_context(|| {
        format!(
            "Failed to generate version index for '{}'",
            config.docs.root.display()
        )
    })?;

    ui::display_status(&format!(
        "Found {} version(s), latest stable: {}",
        report.versions.len(),
        report.latest_stable
    ));

    if report.written {
        ui::display_success(&format!("Updated {}", report.switcher_path.display()));
    } else {
        ui::display_block(&report.switcher_path.display().to_string(), &report.block);
    }

    Ok(report)
}

/// Update the `latest` and `stable` aliases for a freshly published version
pub fn run_link(config: &Config, raw_version: &str, dry_run: bool) -> Result<LinkReport> {
    let report = symlinks::update_aliases(&config.docs.root, raw_version, dry_run)
        .with_context(|| format!("Failed to update links for '{}'", raw_version))?;

    if !report.applicable {
        ui::display_status("No symbolic links need to be updated");
        return Ok(report);
    }

    for update in &report.updates {
        let alias = update.alias.display().to_string();
        match &update.action {
            LinkAction::KeptNewer { current } => {
                ui::display_warning(&MaintenanceWarning::AliasPointsToNewer {
                    alias: update.alias.clone(),
                    current: current.clone(),
                    requested: update.target.clone(),
                });
            }
            _ if dry_run => {
                ui::display_status(&format!("Would link {} -> {}", alias, update.target));
            }
            _ => ui::display_link(&alias, &update.target),
        }
    }

    Ok(report)
}

/// Check or fix trailing whitespace under `root`.
///
/// Fails when `check_only` is set and any file is dirty.
pub fn run_whitespace(
    config: &Config,
    root: &Path,
    paths: &[PathBuf],
    check_only: bool,
) -> Result<WhitespaceReport> {
    let settings = &config.whitespace;

    let stager = if settings.stage && !check_only {
        match Git2Stager::open(root) {
            Ok(stager) => Some(stager),
            Err(e) => {
                ui::display_warning(&MaintenanceWarning::StagingUnavailable {
                    reason: e.to_string(),
                });
                None
            }
        }
    } else {
        None
    };

    let report = whitespace::run(
        root,
        settings,
        paths,
        check_only,
        stager.as_ref().map(|s| s as &dyn Stager),
        |file| {
            if check_only {
                ui::display_status(&format!("Trailing whitespaces found in {}", file.display()));
            } else {
                ui::display_status(&format!(
                    "Removed trailing whitespaces present in {}",
                    file.display()
                ));
            }
        },
    );

    for warning in &report.warnings {
        ui::display_warning(warning);
    }

    ui::display_status(&ui::whitespace_summary(
        report.dirty.len(),
        report.total,
        report.elapsed_ms(),
        check_only,
    ));

    if check_only && !report.is_clean() {
        bail!("Trailing whitespaces found. Try running 'doc-versions whitespace' to fix them");
    }

    Ok(report)
}
