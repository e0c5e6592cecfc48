//! Documentation version strings: `MAJOR.MINOR.PATCH[.LABEL][NUMBER]`.
//!
//! Ordering is release triple first, then stable above prerelease, then the
//! prerelease number. The prerelease label takes no part in comparison, so
//! `1.2.3.alpha1 == 1.2.3.beta1`.

use crate::error::{DocVersionsError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(\.[a-zA-Z]+)?([0-9]+)?$")
        .expect("version pattern is a valid regex")
});

/// Prerelease suffix such as `.rc1` (label `rc`, number 1)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    pub label: String,
    pub number: u64,
}

/// Last component of the sort key.
///
/// `Stable` is declared after `Prerelease` so the derived ordering puts a
/// stable release above every prerelease of the same triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseRank {
    Prerelease(u64),
    Stable,
}

/// Key every comparison is derived from: `(major, minor, patch, rank)`
pub type SortKey = (u64, u64, u64, ReleaseRank);

/// A parsed documentation version
#[derive(Debug, Clone)]
pub struct DocVersion {
    release: (u64, u64, u64),
    prerelease: Option<Prerelease>,
}

impl DocVersion {
    /// Create a stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        DocVersion {
            release: (major, minor, patch),
            prerelease: None,
        }
    }

    /// Parse a version string (e.g. "2.0.0" or "2.1.0.rc3")
    pub fn parse(raw: &str) -> Result<Self> {
        let captures = VERSION_REGEX
            .captures(raw)
            .ok_or_else(|| DocVersionsError::invalid_version(raw))?;

        let number = |idx: usize| -> Result<u64> {
            captures
                .get(idx)
                .map_or("0", |m| m.as_str())
                .parse::<u64>()
                .map_err(|_| DocVersionsError::invalid_version(raw))
        };

        let release = (number(1)?, number(2)?, number(3)?);

        let prerelease = match captures.get(4) {
            Some(label) => Some(Prerelease {
                label: label.as_str().trim_start_matches('.').to_string(),
                number: number(5)?,
            }),
            None => None,
        };

        Ok(DocVersion {
            release,
            prerelease,
        })
    }

    pub fn major(&self) -> u64 {
        self.release.0
    }

    pub fn minor(&self) -> u64 {
        self.release.1
    }

    pub fn patch(&self) -> u64 {
        self.release.2
    }

    /// The `(major, minor, patch)` triple
    pub fn release(&self) -> (u64, u64, u64) {
        self.release
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.prerelease.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn sort_key(&self) -> SortKey {
        let rank = match &self.prerelease {
            Some(pre) => ReleaseRank::Prerelease(pre.number),
            None => ReleaseRank::Stable,
        };
        (self.release.0, self.release.1, self.release.2, rank)
    }

    /// Tri-state comparison by sort key
    pub fn compare(&self, other: &DocVersion) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Equality as used by the ordering: same triple and same prerelease rank.
    ///
    /// Labels are ignored, so `1.2.3.alpha1` and `1.2.3.beta1` are the same
    /// rank even though they render differently.
    pub fn same_release_rank(&self, other: &DocVersion) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl PartialEq for DocVersion {
    fn eq(&self, other: &Self) -> bool {
        self.same_release_rank(other)
    }
}

impl Eq for DocVersion {}

impl PartialOrd for DocVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DocVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Must agree with `Eq`, so only the sort key is hashed.
impl Hash for DocVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl FromStr for DocVersion {
    type Err = DocVersionsError;

    fn from_str(s: &str) -> Result<Self> {
        DocVersion::parse(s)
    }
}

impl fmt::Display for DocVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch) = self.release;
        write!(f, "{}.{}.{}", major, minor, patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, ".{}{}", pre.label, pre.number)?;
        }
        Ok(())
    }
}
