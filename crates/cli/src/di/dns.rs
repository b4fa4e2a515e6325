use ec2_dns_application::{HostnameMatcher, RespondToQueryUseCase};
use ec2_dns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new() -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let matcher = Arc::new(HostnameMatcher::new()?);
        let use_case = Arc::new(RespondToQueryUseCase::new(matcher));
        let handler = DnsServerHandler::new(use_case);

        Ok(Self { handler })
    }
}
