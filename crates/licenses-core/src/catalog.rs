//! # License Catalog
//!
//! The catalog is built once from a directory of definition files and is
//! read-only afterwards. Callers share it behind an `Arc`; there is no
//! interior mutability, so concurrent readers need no locking.
//!
//! ## Loading
//!
//! Every regular file directly inside the directory with a `txt` extension
//! is parsed, in ascending file-name order. The first malformed file aborts
//! the load. Records are keyed by their lowercased identifier; when two
//! files share a key the later file replaces the earlier one and a warning
//! names both.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::definition::parse_definition;
use crate::error::{LoadError, NotFoundError};
use crate::license::License;

/// Extension of definition files.
pub const DEFINITION_EXTENSION: &str = "txt";

/// Immutable mapping from lowercased identifier to license.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    licenses: HashMap<String, License>,
}

impl Catalog {
    /// Load every definition file in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let mut licenses = HashMap::new();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();

        for path in definition_files(dir)? {
            let text = std::fs::read_to_string(&path).map_err(|source| LoadError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let license = parse_definition(&text).map_err(|source| LoadError::Definition {
                path: path.clone(),
                source,
            })?;
            let key = license.key();
            if let Some(previous) = sources.insert(key.clone(), path.clone()) {
                tracing::warn!(
                    spdx_id = %license.spdx_id(),
                    replaced = %previous.display(),
                    by = %path.display(),
                    "duplicate license identifier; later file wins"
                );
            }
            tracing::debug!(spdx_id = %license.spdx_id(), path = %path.display(), "loaded license");
            licenses.insert(key, license);
        }

        if licenses.is_empty() {
            tracing::warn!(dir = %dir.display(), "no license definitions found");
        } else {
            tracing::info!(dir = %dir.display(), count = licenses.len(), "license catalog loaded");
        }

        Ok(Self { licenses })
    }

    /// Build a catalog from already-constructed records.
    ///
    /// Same collision rule as [`Catalog::load`]: a later record with the
    /// same key replaces an earlier one.
    pub fn from_licenses(licenses: impl IntoIterator<Item = License>) -> Self {
        let mut map = HashMap::new();
        for license in licenses {
            if let Some(previous) = map.insert(license.key(), license) {
                tracing::warn!(
                    spdx_id = %previous.spdx_id(),
                    "duplicate license identifier; later record wins"
                );
            }
        }
        Self { licenses: map }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, id: &str) -> Option<&License> {
        self.licenses.get(&id.to_lowercase())
    }

    /// Case-insensitive lookup that reports a miss as an error.
    pub fn lookup(&self, id: &str) -> Result<&License, NotFoundError> {
        self.get(id).ok_or_else(|| NotFoundError { id: id.to_string() })
    }

    /// All licenses, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &License> {
        self.licenses.values()
    }

    /// All licenses ordered by identifier.
    pub fn sorted(&self) -> Vec<&License> {
        let mut licenses: Vec<&License> = self.licenses.values().collect();
        licenses.sort_by(|a, b| a.spdx_id().cmp(b.spdx_id()));
        licenses
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

/// Load the catalog stored in `dir`.
pub fn load_catalog(dir: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    Catalog::load(dir)
}

/// Definition files directly inside `dir`, sorted by path.
fn definition_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_error = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let is_definition = path
            .extension()
            .is_some_and(|ext| ext == DEFINITION_EXTENSION);
        if is_definition && path.is_file() {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-definition entry");
        }
    }
    files.sort();
    Ok(files)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Identifiers shaped like SPDX ids. Hyphens never repeat, so an id
    /// cannot contain the `---` segment delimiter.
    fn spdx_id() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9.]{0,7}(-[A-Za-z0-9.]{1,7}){0,2}"
    }

    proptest! {
        #[test]
        fn any_casing_finds_the_same_record(
            id in spdx_id(),
            flips in proptest::collection::vec(any::<bool>(), 24),
        ) {
            let text = format!(
                "---\ntitle: Title\nspdx-id: '{id}'\ndescription: d\nhow: h\n---\n\nbody\n"
            );
            let license = parse_definition(&text).unwrap();
            let catalog = Catalog::from_licenses([license.clone()]);

            let query: String = id
                .chars()
                .zip(flips.iter().chain(std::iter::repeat(&false)))
                .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert_eq!(catalog.get(&query), Some(&license));
        }
    }
}
