use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket with the configured backlog.
///
/// Failures here (bad address, socket, bind, listen) are fatal and
/// propagate to the caller.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg.server.listen_addr.parse()?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.bind(addr)?;

    Ok(socket.listen(cfg.server.backlog)?)
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg.clone()).await
}

/// Accept loop. One detached task per accepted connection; the loop never
/// waits on an in-flight handler and never exits on its own.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let max_request_bytes = cfg.connection.max_request_bytes;
        tokio::spawn(async move {
            let conn = Connection::new(socket, max_request_bytes);
            if let Err(e) = conn.serve().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
