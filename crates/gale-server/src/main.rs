//! Standalone gale server
//!
//! Binds the listener, then hands every accepted connection to the core
//! dispatcher on its own task. Connections never share mutable state.

use anyhow::Context;
use clap::Parser;
use gale_core::{
    bind_listener, serve_connection, Dispatcher, HttpFetcher, ImageCatalog, ServerConfig, SiteDir,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Directory the root listing and static pages are served from
const SITE_ROOT: &str = "www";

#[derive(Parser)]
#[command(name = "gale", about = "A deliberately-minimal toy HTTP server")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 9000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig {
        port: cli.port,
        ..Default::default()
    };

    let std_listener = bind_listener(&config)
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    std_listener.set_nonblocking(true)?;
    let listener = TcpListener::from_std(std_listener)?;
    info!(addr = %config.addr(), "listening");

    let dispatcher = Arc::new(Dispatcher::new(
        ImageCatalog::builtin(),
        SiteDir::new(SITE_ROOT),
        HttpFetcher::new().context("failed to build outbound HTTP client")?,
    ));

    loop {
        let (stream, peer) = listener.accept().await?;
        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move {
            if let Err(e) = serve_connection(stream, &dispatcher).await {
                warn!(peer = %peer, error = %e, "connection failed");
            }
        });
    }
}
