use ec2_dns_infrastructure::dns::{DnsListeners, DnsServerHandler};
use std::net::SocketAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::signal;

/// Bind both transports and serve until SIGINT/SIGTERM.
///
/// A bind failure on either transport is returned immediately.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
    tcp_idle_timeout: Duration,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");

    let listeners = DnsListeners::bind(bind_addr, handler, tcp_idle_timeout).await?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        signal::wait_for_shutdown_signal().await;
        signal_token.cancel();
    });

    info!(bind_address = %bind_addr, "DNS server ready");
    listeners.run(shutdown).await?;
    Ok(())
}
