//! HTTP server command
//!
//! Binds the listener only after the dictionary is loaded, so a reachable
//! server always has words to search.

use anyhow::{Context, Result};
use std::net::SocketAddr;

use crate::core::Word;
use crate::server::{self, AppState};

/// Configuration for the serve command
pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
}

/// Run the HTTP API server until interrupted
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot be
/// bound, or the server fails while running.
pub fn run_serve(config: &ServeConfig, dictionary: Vec<Word>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(serve(config, dictionary))
}

async fn serve(config: &ServeConfig, dictionary: Vec<Word>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address '{}:{}'", config.bind, config.port))?;

    let words = dictionary.len();
    let app = server::router(AppState::new(dictionary));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, words, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
}
