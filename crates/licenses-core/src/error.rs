//! # Error Types
//!
//! Structured errors for record construction, definition parsing, catalog
//! loading and lookup. Load errors always carry the offending path so a
//! failed startup points straight at the file that needs fixing.

use std::path::PathBuf;

use thiserror::Error;

/// A license record could not be constructed from its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A field is present but has the wrong shape.
    #[error("field `{field}` is invalid: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => field,
        }
    }
}

/// A single definition file could not be turned into a license record.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The text does not split into preamble, metadata and content.
    #[error("expected 3 `---`-delimited segments, found {segments}")]
    MissingDelimiter { segments: usize },

    /// The metadata block is not valid YAML.
    #[error("failed to parse metadata: {0}")]
    Metadata(#[from] serde_yaml::Error),

    /// The metadata block parsed, but is not a key/value mapping.
    #[error("metadata block is not a key/value mapping")]
    MetadataNotMapping,

    /// The metadata failed record validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading a catalog directory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog directory could not be listed.
    #[error("cannot read license directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A definition file could not be read.
    #[error("cannot read license file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A definition file is malformed.
    #[error("invalid license file {path}: {source}")]
    Definition {
        path: PathBuf,
        source: DefinitionError,
    },
}

impl LoadError {
    /// Path of the file or directory that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadFile { path, .. }
            | Self::Definition { path, .. } => path,
        }
    }
}

/// Requested identifier is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("license {id:?} not found")]
pub struct NotFoundError {
    /// The identifier as requested by the caller.
    pub id: String,
}
