//! Integration test: load the `licenses/` directory shipped at the
//! repository root and check every definition against its source file.

use std::path::PathBuf;

use licenses_core::{load_catalog, parse_definition};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn licenses_dir() -> PathBuf {
    repo_root().join("licenses")
}

#[test]
fn shipped_catalog_loads() {
    let catalog = load_catalog(licenses_dir()).expect("shipped licenses must load");
    assert!(catalog.len() >= 4, "found {} licenses", catalog.len());

    for id in ["mit", "isc", "0bsd", "unlicense"] {
        assert!(catalog.get(id).is_some(), "missing {id}");
    }
}

#[test]
fn one_record_per_shipped_file() {
    let catalog = load_catalog(licenses_dir()).unwrap();
    let files = std::fs::read_dir(licenses_dir())
        .unwrap()
        .flatten()
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .count();
    assert_eq!(catalog.len(), files);
}

#[test]
fn shipped_content_matches_trimmed_source_segment() {
    let catalog = load_catalog(licenses_dir()).unwrap();
    let text = std::fs::read_to_string(licenses_dir().join("mit.txt")).unwrap();
    let segment = text.splitn(3, "---").nth(2).unwrap().trim();

    let mit = catalog.get("MIT").unwrap();
    assert_eq!(mit.content(), segment);
    assert!(mit.content().starts_with("MIT License"));
    assert_eq!(
        mit.permissions(),
        ["commercial-use", "modifications", "distribution", "private-use"]
    );
    assert_eq!(mit.conditions(), ["include-copyright"]);
    assert_eq!(mit.using().len(), 3);
}

#[test]
fn null_conditions_in_shipped_file_default_to_empty() {
    let text = std::fs::read_to_string(licenses_dir().join("unlicense.txt")).unwrap();
    let unlicense = parse_definition(&text).unwrap();
    assert_eq!(unlicense.spdx_id(), "Unlicense");
    assert!(unlicense.conditions().is_empty());
    assert!(unlicense.note().is_some());
}

#[test]
fn shipped_identifiers_keep_canonical_case() {
    let catalog = load_catalog(licenses_dir()).unwrap();
    let ids: Vec<&str> = catalog.sorted().iter().map(|l| l.spdx_id()).collect();
    assert_eq!(ids, ["0BSD", "ISC", "MIT", "Unlicense"]);
}
