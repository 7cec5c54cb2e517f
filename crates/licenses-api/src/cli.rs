//! # Command Line
//!
//! Every option can also be set through the environment, so the binary
//! runs unchanged in a container.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogFormat;
use crate::state::{AppConfig, DEFAULT_LICENSES_DIR, DEFAULT_PORT};

/// License API: serve software license metadata and texts over HTTP.
#[derive(Parser, Debug)]
#[command(name = "licenses-api", version, about)]
pub struct Cli {
    /// Directory of license definition files.
    #[arg(long, env = "LICENSES_DIR", default_value = DEFAULT_LICENSES_DIR, global = true)]
    pub licenses_dir: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0", global = true)]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load the catalog and serve it over HTTP (the default).
    Serve,
    /// Load the catalog, print a summary, and exit.
    Check,
}

impl Cli {
    /// The subcommand to run, defaulting to `serve`.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Resolved runtime configuration.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            host: self.host,
            port: self.port,
            licenses_dir: self.licenses_dir.clone(),
        }
    }
}
