use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg.recv_timeout()).await
}

/// Accepts and serves connections one at a time: each connection's
/// parse/respond/close sequence runs to completion before the next accept.
/// A failed connection is logged and does not stop the listener.
pub async fn serve(listener: TcpListener, recv_timeout: Duration) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, recv_timeout);
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
