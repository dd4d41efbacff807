//! Serve command: run the HTTP spell-check service.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::{info, instrument};

use bangla_spell_core::{Config, DictionarySources, DictionaryStore};

use crate::server;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address (overrides config `host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port (overrides config `port`).
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Load the dictionary on the first request instead of at startup.
    #[arg(long)]
    pub lazy: bool,
}

/// Run the HTTP server until Ctrl-C.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let store = Arc::new(DictionaryStore::new(DictionarySources::from_config(&config)));

    if !args.lazy {
        let warm = Arc::clone(&store);
        let (dictionary, _outcomes) = tokio::task::spawn_blocking(move || warm.reload())
            .await
            .context("dictionary load task failed")?;
        info!(words = dictionary.len(), "dictionary ready");
    }

    let app = server::router(store, config.input_limit());

    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);
    let listener = bind(&host, port).await?;
    let local = listener.local_addr().context("failed to read bound address")?;
    info!(%local, "bangla-spell listening on http://{local}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("server stopped");
    Ok(())
}

/// Bind a listener. `host` may be a name, an IPv4 address or a bare IPv6
/// address such as `::1`.
async fn bind(host: &str, port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host} port {port}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
