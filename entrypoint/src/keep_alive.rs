use std::net::{Ipv4Addr, SocketAddr};

use axum::{Router, routing::get};
use tracing::{info, warn};

async fn home() -> &'static str {
    "Bot is alive!"
}

/// Minimal HTTP surface so the hosting platform's uptime pinger keeps the
/// process from idling out.
pub(crate) async fn serve(port: u16) {
    let app = Router::new().route("/", get(home));
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            warn!("Keep-alive server failed to bind {addr}: {err}");
            return;
        }
    };

    info!("Keep-alive listening on {addr}");

    if let Err(err) = axum::serve(listener, app).await {
        warn!("Keep-alive server stopped: {err}");
    }
}
