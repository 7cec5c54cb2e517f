//! # Route Modules
//!
//! Each submodule exposes a `router()` returning a `Router<AppState>`;
//! [`crate::app`] merges them and attaches state.

pub mod browse;
pub mod licenses;
