use super::server::DnsServerHandler;
use ec2_dns_domain::DomainError;
use hickory_server::ServerFuture;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The UDP socket and TCP listener serving DNS on one address.
///
/// Both are bound up front by [`DnsListeners::bind`]; either bind failing is
/// an error for the whole server.
pub struct DnsListeners {
    udp: UdpSocket,
    tcp: TcpListener,
    handler: DnsServerHandler,
    tcp_idle_timeout: Duration,
}

impl DnsListeners {
    /// Bind UDP first, then TCP on the same resolved address, so that port 0
    /// yields one shared ephemeral port.
    pub async fn bind(
        addr: SocketAddr,
        handler: DnsServerHandler,
        tcp_idle_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let udp = UdpSocket::bind(addr)
            .await
            .map_err(|e| bind_error("UDP", addr, e))?;
        let bound = udp.local_addr().map_err(|e| bind_error("UDP", addr, e))?;

        let tcp = TcpListener::bind(bound)
            .await
            .map_err(|e| bind_error("TCP", bound, e))?;

        info!(bind_address = %bound, "DNS listeners bound (UDP + TCP)");

        Ok(Self {
            udp,
            tcp,
            handler,
            tcp_idle_timeout,
        })
    }

    pub fn udp_addr(&self) -> Result<SocketAddr, DomainError> {
        self.udp
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub fn tcp_addr(&self) -> Result<SocketAddr, DomainError> {
        self.tcp
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// Serve until `shutdown` is cancelled.
    ///
    /// Cancelling `shutdown` cancels the server's own shutdown token, which
    /// stops the UDP receive loop and the TCP accept loop.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let mut server = ServerFuture::new(self.handler);
        server.register_socket(self.udp);
        server.register_listener(self.tcp, self.tcp_idle_timeout);

        let server_token = server.shutdown_token().clone();
        let forward = tokio::spawn(async move {
            shutdown.cancelled().await;
            info!("DNS listeners shutting down");
            server_token.cancel();
        });

        let result = server.block_until_done().await;
        forward.abort();

        match result {
            Ok(()) => {
                info!("DNS listeners stopped");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "DNS listener stopped with error");
                Err(DomainError::ListenerFailed {
                    transport: "DNS",
                    reason: e.to_string(),
                })
            }
        }
    }
}

fn bind_error(transport: &'static str, addr: SocketAddr, e: io::Error) -> DomainError {
    DomainError::BindFailed {
        transport,
        addr,
        reason: e.to_string(),
    }
}
