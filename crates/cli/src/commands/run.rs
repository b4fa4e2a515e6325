use crate::di::DnsServices;
use crate::server;
use ec2_dns_domain::Config;
use ec2_dns_infrastructure::system::ResolverFile;
use std::time::Duration;
use tracing::{info, warn};

pub async fn run(config: Config) -> anyhow::Result<()> {
    info!("Starting ec2-dns v{}", env!("CARGO_PKG_VERSION"));

    warn_if_resolver_unconfigured(&config);

    let bind_addr = config.server.socket_addr()?;
    let services = DnsServices::new()?;

    server::start_dns_server(
        bind_addr,
        services.handler,
        Duration::from_secs(config.server.tcp_idle_timeout_secs),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

// The server still starts; these are hints, not preconditions.
fn warn_if_resolver_unconfigured(config: &Config) {
    if !cfg!(target_os = "macos") {
        warn!("Limited support for operating systems other than macOS");
        return;
    }

    let resolver_file = ResolverFile::from_config(config);
    if !resolver_file.exists() {
        warn!(
            path = %resolver_file.path().display(),
            "macOS resolver not configured. Please run: `sudo ec2-dns setup`"
        );
    } else if let Err(e) = resolver_file.check() {
        warn!(
            error = %e,
            "macOS resolver not correctly configured. This might be fixable by re-running setup: `sudo ec2-dns setup`"
        );
    }
}
