//! # License Records
//!
//! A [`License`] is the validated, immutable form of one definition file.
//! Construction goes through [`License::from_fields`], which walks an
//! explicit field table instead of inferring shapes at runtime:
//!
//! | Key            | Required | Shape                 | When absent or null         |
//! |----------------|----------|-----------------------|-----------------------------|
//! | `title`        | yes      | string                | error                       |
//! | `spdx-id`      | yes      | non-empty string      | error                       |
//! | `nickname`     | no       | string                | none                        |
//! | `description`  | yes      | string                | error                       |
//! | `how`          | yes      | string                | error                       |
//! | `note`         | no       | string                | none                        |
//! | `using`        | no       | mapping string→string | empty mapping               |
//! | `permissions`  | no       | sequence of strings   | empty sequence              |
//! | `conditions`   | no       | sequence of strings   | empty sequence              |
//! | `limitations`  | no       | sequence of strings   | empty sequence              |
//! | `content`      | yes      | string (separate arg) | error                       |
//!
//! `spdx_id` is accepted as an alias for `spdx-id`. Numbers and booleans in
//! string positions are converted to their textual form; sequences, mappings
//! and tagged values are rejected.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::error::ValidationError;

/// On-disk and on-the-wire key of the identifier field.
pub const SPDX_ID_KEY: &str = "spdx-id";

/// Accepted alternative spelling of [`SPDX_ID_KEY`].
pub const SPDX_ID_ALIAS: &str = "spdx_id";

const STRING: &str = "a string";
const STRING_LIST: &str = "a sequence of strings";
const STRING_MAP: &str = "a mapping of strings to strings";

/// One software license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    title: String,
    spdx_id: String,
    nickname: Option<String>,
    description: String,
    how: String,
    note: Option<String>,
    using: BTreeMap<String, String>,
    permissions: Vec<String>,
    conditions: Vec<String>,
    limitations: Vec<String>,
    content: String,
}

impl License {
    /// Build a record from a parsed metadata mapping and the license text.
    ///
    /// Required fields are checked in table order, so the first missing
    /// field is the one reported.
    pub fn from_fields(
        fields: &Mapping,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = required_string(fields, &["title"], "title")?;
        let spdx_id = required_string(fields, &[SPDX_ID_KEY, SPDX_ID_ALIAS], "spdx_id")?;
        if spdx_id.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "spdx_id",
                expected: "a non-empty identifier",
            });
        }
        let description = required_string(fields, &["description"], "description")?;
        let how = required_string(fields, &["how"], "how")?;

        Ok(Self {
            title,
            spdx_id,
            nickname: optional_string(fields, "nickname")?,
            description,
            how,
            note: optional_string(fields, "note")?,
            using: string_map(fields, "using")?.unwrap_or_default(),
            permissions: string_list(fields, "permissions")?.unwrap_or_default(),
            conditions: string_list(fields, "conditions")?.unwrap_or_default(),
            limitations: string_list(fields, "limitations")?.unwrap_or_default(),
            content: content.into(),
        })
    }

    /// Catalog key: the identifier lowercased.
    pub fn key(&self) -> String {
        self.spdx_id.to_lowercase()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Identifier in its canonical (display) case.
    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Guidance on how to apply the license to a project.
    pub fn how(&self) -> &str {
        &self.how
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Example adopters, name to description.
    pub fn using(&self) -> &BTreeMap<String, String> {
        &self.using
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn limitations(&self) -> &[String] {
        &self.limitations
    }

    /// Full license text, trimmed.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// First non-null value among `keys`.
fn lookup<'a>(fields: &'a Mapping, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_string(
    fields: &Mapping,
    keys: &[&str],
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = lookup(fields, keys).ok_or(ValidationError::MissingField { field })?;
    scalar_text(value).ok_or(ValidationError::InvalidField {
        field,
        expected: STRING,
    })
}

fn optional_string(fields: &Mapping, field: &'static str) -> Result<Option<String>, ValidationError> {
    lookup(fields, &[field])
        .map(|value| {
            scalar_text(value).ok_or(ValidationError::InvalidField {
                field,
                expected: STRING,
            })
        })
        .transpose()
}

fn string_list(
    fields: &Mapping,
    field: &'static str,
) -> Result<Option<Vec<String>>, ValidationError> {
    let Some(value) = lookup(fields, &[field]) else {
        return Ok(None);
    };
    let invalid = ValidationError::InvalidField {
        field,
        expected: STRING_LIST,
    };
    let items = value.as_sequence().ok_or_else(|| invalid.clone())?;
    items
        .iter()
        .map(|item| scalar_text(item).ok_or_else(|| invalid.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn string_map(
    fields: &Mapping,
    field: &'static str,
) -> Result<Option<BTreeMap<String, String>>, ValidationError> {
    let Some(value) = lookup(fields, &[field]) else {
        return Ok(None);
    };
    let invalid = ValidationError::InvalidField {
        field,
        expected: STRING_MAP,
    };
    let entries = value.as_mapping().ok_or_else(|| invalid.clone())?;
    entries
        .iter()
        .map(|(name, detail)| match (scalar_text(name), scalar_text(detail)) {
            (Some(name), Some(detail)) => Ok((name, detail)),
            _ => Err(invalid.clone()),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    const MINIMAL: &str = "
title: MIT License
spdx-id: MIT
description: A short and simple permissive license.
how: Create a text file (typically named LICENSE) in the root of your source code.
";

    #[test]
    fn builds_record_from_complete_metadata() {
        let meta = fields(
            "
title: GNU General Public License v3.0
spdx-id: GPL-3.0
nickname: GNU GPLv3
description: Permissions of this strong copyleft license are conditioned.
how: Create a text file named COPYING.
note: The FSF recommends adding a notice to each source file.
using:
  Bash: https://git.savannah.gnu.org/cgit/bash.git/tree/COPYING
  GIMP: https://git.gnome.org/browse/gimp/tree/COPYING
permissions:
  - commercial-use
  - modifications
conditions:
  - include-copyright
  - disclose-source
limitations:
  - liability
  - warranty
",
        );
        let license = License::from_fields(&meta, "GNU GENERAL PUBLIC LICENSE").unwrap();

        assert_eq!(license.title(), "GNU General Public License v3.0");
        assert_eq!(license.spdx_id(), "GPL-3.0");
        assert_eq!(license.key(), "gpl-3.0");
        assert_eq!(license.nickname(), Some("GNU GPLv3"));
        assert_eq!(
            license.note(),
            Some("The FSF recommends adding a notice to each source file.")
        );
        assert_eq!(license.using().len(), 2);
        assert_eq!(
            license.using().get("Bash").map(String::as_str),
            Some("https://git.savannah.gnu.org/cgit/bash.git/tree/COPYING")
        );
        assert_eq!(license.permissions(), ["commercial-use", "modifications"]);
        assert_eq!(license.conditions(), ["include-copyright", "disclose-source"]);
        assert_eq!(license.limitations(), ["liability", "warranty"]);
        assert_eq!(license.content(), "GNU GENERAL PUBLIC LICENSE");
    }

    #[test]
    fn absent_collections_default_to_empty() {
        let license = License::from_fields(&fields(MINIMAL), "text").unwrap();
        assert!(license.using().is_empty());
        assert!(license.permissions().is_empty());
        assert!(license.conditions().is_empty());
        assert!(license.limitations().is_empty());
        assert_eq!(license.nickname(), None);
        assert_eq!(license.note(), None);
    }

    #[test]
    fn null_collections_default_to_empty_uniformly() {
        for key in ["using", "permissions", "conditions", "limitations"] {
            let yaml = format!("{MINIMAL}{key}:\n");
            let license = License::from_fields(&fields(&yaml), "text")
                .unwrap_or_else(|e| panic!("{key}: {e}"));
            assert!(license.using().is_empty(), "{key}");
            assert!(license.permissions().is_empty(), "{key}");
            assert!(license.conditions().is_empty(), "{key}");
            assert!(license.limitations().is_empty(), "{key}");
        }
    }

    #[test]
    fn each_required_field_is_reported_when_missing() {
        for (key, field) in [
            ("title", "title"),
            ("spdx-id", "spdx_id"),
            ("description", "description"),
            ("how", "how"),
        ] {
            let yaml: String = MINIMAL
                .lines()
                .filter(|line| !line.starts_with(&format!("{key}:")))
                .map(|line| format!("{line}\n"))
                .collect();
            let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
            assert_eq!(err, ValidationError::MissingField { field });
        }
    }

    #[test]
    fn null_required_field_is_missing() {
        let yaml = MINIMAL.replace(
            "description: A short and simple permissive license.",
            "description: ~",
        );
        let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "description"
            }
        );
    }

    #[test]
    fn underscore_alias_is_accepted() {
        let yaml = MINIMAL.replace("spdx-id:", "spdx_id:");
        let license = License::from_fields(&fields(&yaml), "text").unwrap();
        assert_eq!(license.spdx_id(), "MIT");
    }

    #[test]
    fn hyphenated_key_wins_over_alias() {
        let yaml = format!("{MINIMAL}spdx_id: Other\n");
        let license = License::from_fields(&fields(&yaml), "text").unwrap();
        assert_eq!(license.spdx_id(), "MIT");
    }

    #[test]
    fn blank_identifier_is_rejected() {
        let yaml = MINIMAL.replace("spdx-id: MIT", "spdx-id: '  '");
        let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
        assert_eq!(err.field(), "spdx_id");
    }

    #[test]
    fn numeric_scalars_become_text() {
        let yaml = MINIMAL.replace("title: MIT License", "title: 2024");
        let license = License::from_fields(&fields(&yaml), "text").unwrap();
        assert_eq!(license.title(), "2024");
    }

    #[test]
    fn sequence_in_string_field_is_rejected() {
        let yaml = MINIMAL.replace("how: Create", "how: [Create]\nignored: Create");
        let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidField {
                field: "how",
                expected: STRING
            }
        );
    }

    #[test]
    fn scalar_in_list_field_is_rejected() {
        let yaml = format!("{MINIMAL}permissions: commercial-use\n");
        let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidField {
                field: "permissions",
                expected: STRING_LIST
            }
        );
    }

    #[test]
    fn nested_value_in_using_is_rejected() {
        let yaml = format!("{MINIMAL}using:\n  Project:\n    - nested\n");
        let err = License::from_fields(&fields(&yaml), "text").unwrap_err();
        assert_eq!(err.field(), "using");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let yaml = format!("{MINIMAL}featured: true\nhidden: false\n");
        assert!(License::from_fields(&fields(&yaml), "text").is_ok());
    }

    #[test]
    fn key_lowercases_identifier() {
        let yaml = MINIMAL.replace("spdx-id: MIT", "spdx-id: Apache-2.0");
        let license = License::from_fields(&fields(&yaml), "text").unwrap();
        assert_eq!(license.key(), "apache-2.0");
        assert_eq!(license.spdx_id(), "Apache-2.0");
    }
}
