//! # licenses-core: License Catalog Core
//!
//! Parses a directory of license definition files into a validated,
//! immutable [`Catalog`] keyed by lowercased SPDX identifier.
//!
//! - [`license`]: the [`License`] record and its field table.
//! - [`definition`]: splitting a definition file into metadata and text.
//! - [`catalog`]: directory loading and case-insensitive lookup.
//! - [`error`]: validation, definition, load and lookup errors.
//!
//! ## Crate Policy
//!
//! - No HTTP or runtime dependencies; the API crate sits on top.
//! - The catalog is built once and never mutated.
//! - No `.unwrap()` outside tests.

pub mod catalog;
pub mod definition;
pub mod error;
pub mod license;

pub use catalog::{load_catalog, Catalog};
pub use definition::parse_definition;
pub use error::{DefinitionError, LoadError, NotFoundError, ValidationError};
pub use license::License;
