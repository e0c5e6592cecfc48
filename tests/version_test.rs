use doc_versions::{DocVersion, DocVersionsError, VersionCatalog};

fn v(raw: &str) -> DocVersion {
    DocVersion::parse(raw).expect("valid version")
}

#[test]
fn test_stable_round_trip() {
    for raw in ["0.1.0", "1.2.3", "2.0.0", "10.0.100"] {
        assert_eq!(v(raw).to_string(), raw);
    }
}

#[test]
fn test_prerelease_round_trip() {
    for raw in ["2.0.0.dev101", "1.10.0.rc1", "3.0.0.alpha2", "3.0.0.b0"] {
        assert_eq!(v(raw).to_string(), raw);
    }
}

#[test]
fn test_numeric_not_lexicographic() {
    assert!(v("1.2.3") < v("1.2.4"));
    assert!(v("1.9.0") < v("1.10.0"));
    assert!(v("0.0.10") > v("0.0.9"));
}

#[test]
fn test_stable_outranks_prerelease_of_same_release() {
    assert!(v("1.2.3") > v("1.2.3.rc1"));
    assert!(v("1.2.3.rc1") < v("1.2.3.rc2"));
    assert!(v("1.2.3.rc1") >= v("1.2.3.rc1"));
    assert!(v("1.2.3.rc2") <= v("1.2.3"));
}

#[test]
fn test_invalid_version() {
    let err = DocVersion::parse("abc").unwrap_err();
    assert!(matches!(err, DocVersionsError::InvalidVersion { ref input } if input == "abc"));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_descending_sort() {
    let catalog: VersionCatalog = ["2.0.0", "1.9.9", "1.10.0", "1.10.0.rc1"]
        .iter()
        .map(|raw| v(raw))
        .collect();
    let sorted: Vec<String> = catalog.sorted().iter().map(|v| v.to_string()).collect();
    assert_eq!(sorted, vec!["2.0.0", "1.10.0", "1.10.0.rc1", "1.9.9"]);
}

#[test]
fn test_latest_stable_skips_prerelease() {
    let catalog: VersionCatalog = ["1.0.0", "1.1.0.rc1"].iter().map(|raw| v(raw)).collect();
    assert_eq!(catalog.latest_stable().unwrap().to_string(), "1.0.0");
}

#[test]
fn test_label_is_not_part_of_ordering() {
    // Observed behaviour kept as-is: only the prerelease number is compared.
    assert_eq!(v("1.2.3.alpha1"), v("1.2.3.beta1"));
    assert!(v("1.2.3.beta1") < v("1.2.3.alpha2"));
}
