use anyhow::Context;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::net::TcpListener;
use tracing::{Instrument, info};

use crate::config::{Config, ServerConfig};
use crate::files::{Dispatcher, StaticFiles};
use crate::http::connection::Connection;

pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))
}

/// Accepts connections forever, serving each one on its own task.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    let next_id = AtomicU64::new(1);

    loop {
        let (socket, peer) = listener.accept().await?;
        let id = next_id.fetch_add(1, Ordering::Relaxed);
        info!(conn = id, %peer, "Accepted connection");

        let dispatcher = Arc::clone(&dispatcher);
        let span = tracing::info_span!("conn", id, %peer);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, dispatcher, read_buffer_size);
                match conn.run().await {
                    Ok(()) => tracing::debug!("Connection closed by peer"),
                    Err(e) => tracing::error!("Connection error from {}: {}", peer, e),
                }
            }
            .instrument(span),
        );
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server).await?;
    info!(
        addr = %listener.local_addr()?,
        root = %cfg.static_files.root.display(),
        "Server started"
    );

    let files = StaticFiles::from_config(&cfg.static_files);
    if !files.root().is_dir() {
        tracing::warn!(root = %files.root().display(), "Static root is not a directory");
    }

    let dispatcher = Arc::new(Dispatcher::new(files));
    serve(listener, dispatcher, cfg.server.read_buffer_size).await
}
