//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. The catalog is loaded before the router is
//! built and is never mutated afterwards, so handlers read it through a
//! plain `Arc` with no locking.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use licenses_core::{Catalog, LoadError};

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_LICENSES_DIR: &str = "licenses";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub licenses_dir: PathBuf,
}

impl AppConfig {
    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            licenses_dir: PathBuf::from(DEFAULT_LICENSES_DIR),
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Wrap an already-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Load the catalog named by `config`.
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        Catalog::load(&config.licenses_dir).map(Self::new)
    }
}
