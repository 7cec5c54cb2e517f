//! # licenses-api: Binary Entry Point
//!
//! Loads the license catalog, then either serves it over HTTP or, with
//! `check`, prints a summary and exits. A catalog that fails to load
//! stops the process before anything binds.

use anyhow::Context;
use clap::Parser;
use licenses_api::cli::{Cli, Command};
use licenses_api::logging::init_tracing;
use licenses_api::state::AppState;
use licenses_core::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    let config = cli.config();
    let state = AppState::load(&config).map_err(|e| {
        tracing::error!(path = %e.path().display(), "catalog load failed: {e}");
        e
    })?;

    match cli.command() {
        Command::Check => {
            print_summary(&state.catalog);
            Ok(())
        }
        Command::Serve => {
            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            tracing::info!(%addr, licenses = state.catalog.len(), "license API listening");

            axum::serve(listener, licenses_api::app(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
            Ok(())
        }
    }
}

fn print_summary(catalog: &Catalog) {
    for license in catalog.sorted() {
        println!("{}\t{}", license.spdx_id(), license.title());
    }
    println!("{} licenses", catalog.len());
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
