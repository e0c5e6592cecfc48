use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions hit while maintaining the docs tree.
/// These are reported to the operator but do not fail the run.
#[derive(Debug, Clone, PartialEq)]
pub enum MaintenanceWarning {
    /// Alias already points at a version newer than the requested one
    AliasPointsToNewer {
        alias: PathBuf,
        current: String,
        requested: String,
    },
    /// A file could not be checked or fixed by the whitespace linter
    FileCheckFailed { path: PathBuf, reason: String },
    /// Fixed files are not staged because no git repository was found
    StagingUnavailable { reason: String },
}

impl fmt::Display for MaintenanceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceWarning::AliasPointsToNewer {
                alias,
                current,
                requested,
            } => write!(
                f,
                "Not re-creating link of {} as it already points to a newer version ({} > {})",
                alias.display(),
                current,
                requested
            ),
            MaintenanceWarning::FileCheckFailed { path, reason } => {
                write!(f, "Failed to check {} because {}", path.display(), reason)
            }
            MaintenanceWarning::StagingUnavailable { reason } => {
                write!(f, "Fixed files will not be staged: {}", reason)
            }
        }
    }
}
