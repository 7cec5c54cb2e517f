//! # Definition Files
//!
//! A definition file is plain text split by the literal `---` delimiter:
//!
//! ```text
//! [preamble, discarded]
//! ---
//! [metadata: YAML key/value mapping]
//! ---
//! [license text]
//! ```
//!
//! The text is split at most twice, so the license text may itself contain
//! `---`. The license text is trimmed and stored as the record's `content`.

use serde_yaml::Value;

use crate::error::DefinitionError;
use crate::license::License;

/// Segment delimiter.
pub const DELIMITER: &str = "---";

/// Split a definition into its metadata and content segments.
///
/// Content is returned trimmed; metadata is returned as-is.
pub fn split_definition(text: &str) -> Result<(&str, &str), DefinitionError> {
    let mut segments = text.splitn(3, DELIMITER);
    let _preamble = segments.next();
    match (segments.next(), segments.next()) {
        (Some(metadata), Some(content)) => Ok((metadata, content.trim())),
        (Some(_), None) => Err(DefinitionError::MissingDelimiter { segments: 2 }),
        _ => Err(DefinitionError::MissingDelimiter { segments: 1 }),
    }
}

/// Parse one definition file into a [`License`].
pub fn parse_definition(text: &str) -> Result<License, DefinitionError> {
    let (metadata, content) = split_definition(text)?;
    if metadata.trim().is_empty() {
        return Err(DefinitionError::MetadataNotMapping);
    }
    let fields = match serde_yaml::from_str::<Value>(metadata)? {
        Value::Mapping(fields) => fields,
        _ => return Err(DefinitionError::MetadataNotMapping),
    };
    Ok(License::from_fields(&fields, content)?)
}
