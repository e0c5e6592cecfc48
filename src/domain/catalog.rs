use crate::domain::version::DocVersion;
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Per-version metadata embedded in the switcher script.
///
/// Serializes to `{}` for stable releases and `{"p":1}` for prereleases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct VersionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<u8>,
}

impl VersionMetadata {
    pub fn for_version(version: &DocVersion) -> Self {
        VersionMetadata {
            p: version.is_prerelease().then_some(1),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.p.is_some()
    }
}

/// A published version together with the directory name it lives under.
///
/// The name is kept verbatim: `01.2.0` and `1.0.0.rc` are valid versions
/// whose rendered forms (`1.2.0`, `1.0.0.rc0`) name no directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub version: DocVersion,
}

/// The set of published documentation versions, newest first
#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    entries: Vec<CatalogEntry>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a version under its rendered name
    pub fn insert(&mut self, version: DocVersion) {
        self.insert_named(version.to_string(), version);
    }

    /// Add a version published under `name`
    pub fn insert_named(&mut self, name: impl Into<String>, version: DocVersion) {
        self.entries.push(CatalogEntry {
            name: name.into(),
            version,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in descending version order.
    ///
    /// Equal-ranked versions (same triple and number, different labels or
    /// spellings) are ordered by name, descending, so output is
    /// deterministic regardless of directory listing order.
    pub fn sorted_entries(&self) -> Vec<&CatalogEntry> {
        let mut sorted: Vec<&CatalogEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            b.version
                .compare(&a.version)
                .then_with(|| b.name.cmp(&a.name))
        });
        sorted
    }

    /// Versions in descending order
    pub fn sorted(&self) -> Vec<&DocVersion> {
        self.sorted_entries()
            .into_iter()
            .map(|entry| &entry.version)
            .collect()
    }

    /// Names in descending version order
    pub fn names(&self) -> Vec<&str> {
        self.sorted_entries()
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Highest stable entry, or the highest entry overall when every entry
    /// is a prerelease
    pub fn latest_stable_entry(&self) -> Option<&CatalogEntry> {
        let sorted = self.sorted_entries();
        let newest = sorted.first().copied();
        sorted
            .into_iter()
            .find(|entry| !entry.version.is_prerelease())
            .or(newest)
    }

    pub fn latest_stable(&self) -> Option<&DocVersion> {
        self.latest_stable_entry().map(|entry| &entry.version)
    }

    /// Ordered mapping of published name to metadata
    pub fn entries(&self) -> IndexMap<&str, VersionMetadata> {
        self.sorted_entries()
            .into_iter()
            .map(|entry| {
                (
                    entry.name.as_str(),
                    VersionMetadata::for_version(&entry.version),
                )
            })
            .collect()
    }

    /// Compact JSON object, e.g. `{"2.0.0":{},"2.1.0.rc1":{"p":1}}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries())?)
    }
}

impl FromIterator<DocVersion> for VersionCatalog {
    fn from_iter<I: IntoIterator<Item = DocVersion>>(iter: I) -> Self {
        let mut catalog = VersionCatalog::new();
        for version in iter {
            catalog.insert(version);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(raw: &[&str]) -> VersionCatalog {
        raw.iter().map(|r| DocVersion::parse(r).unwrap()).collect()
    }

    #[test]
    fn test_sorted_descending() {
        let catalog = catalog(&["2.0.0", "1.9.9", "1.10.0", "1.10.0.rc1"]);
        let rendered: Vec<String> = catalog.sorted().iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["2.0.0", "1.10.0", "1.10.0.rc1", "1.9.9"]);
    }

    #[test]
    fn test_latest_stable_skips_newer_prerelease() {
        let catalog = catalog(&["1.0.0", "1.1.0.rc1"]);
        assert_eq!(catalog.latest_stable().unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_latest_stable_all_prereleases() {
        let catalog = catalog(&["1.0.0.rc1", "1.0.0.rc2", "0.9.0.dev3"]);
        assert_eq!(catalog.latest_stable().unwrap().to_string(), "1.0.0.rc2");
    }

    #[test]
    fn test_latest_stable_empty() {
        assert!(VersionCatalog::new().latest_stable().is_none());
    }

    #[test]
    fn test_equal_rank_tie_break_is_deterministic() {
        let a = catalog(&["1.0.0.alpha1", "1.0.0.beta1"]);
        let b = catalog(&["1.0.0.beta1", "1.0.0.alpha1"]);
        let render = |c: &VersionCatalog| -> Vec<String> {
            c.sorted().iter().map(|v| v.to_string()).collect()
        };
        assert_eq!(render(&a), vec!["1.0.0.beta1", "1.0.0.alpha1"]);
        assert_eq!(render(&a), render(&b));
    }

    #[test]
    fn test_to_json_compact_and_ordered() {
        let catalog = catalog(&["1.0.0", "2.0.0.dev1", "1.1.0"]);
        assert_eq!(
            catalog.to_json().unwrap(),
            r#"{"2.0.0.dev1":{"p":1},"1.1.0":{},"1.0.0":{}}"#
        );
    }

    #[test]
    fn test_named_entries_keep_directory_names() {
        let mut catalog = VersionCatalog::new();
        for name in ["1.0.0.rc", "01.2.0", "1.0.0.rc0"] {
            catalog.insert_named(name, DocVersion::parse(name).unwrap());
        }

        assert_eq!(catalog.names(), vec!["01.2.0", "1.0.0.rc0", "1.0.0.rc"]);
        assert_eq!(catalog.latest_stable_entry().unwrap().name, "01.2.0");
        assert_eq!(
            catalog.to_json().unwrap(),
            r#"{"01.2.0":{},"1.0.0.rc0":{"p":1},"1.0.0.rc":{"p":1}}"#
        );
    }

    #[test]
    fn test_metadata_flags_prerelease() {
        let stable = DocVersion::parse("1.0.0").unwrap();
        let pre = DocVersion::parse("1.0.0.rc1").unwrap();
        assert!(!VersionMetadata::for_version(&stable).is_prerelease());
        assert!(VersionMetadata::for_version(&pre).is_prerelease());
    }
}
