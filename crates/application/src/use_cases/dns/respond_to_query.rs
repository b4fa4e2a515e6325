use crate::services::HostnameMatcher;
use ec2_dns_domain::{DnsClass, DnsQuery, DnsRequest, DnsResponse, MatchResult, RecordType};
use std::sync::Arc;
use tracing::debug;

pub struct RespondToQueryUseCase {
    matcher: Arc<HostnameMatcher>,
}

impl RespondToQueryUseCase {
    pub fn new(matcher: Arc<HostnameMatcher>) -> Self {
        Self { matcher }
    }

    /// Decide which address, if any, answers `query`.
    ///
    /// The class is checked before anything else. EC2 only publishes these
    /// hostnames for IPv4, so AAAA never matches even for a well-formed name.
    pub fn resolve(&self, query: &DnsQuery) -> MatchResult {
        if query.record_class != DnsClass::Internet {
            return MatchResult::NoMatch;
        }

        match query.record_type {
            RecordType::A => self.matcher.match_name(&query.name),
            RecordType::AAAA => MatchResult::NoMatch,
            RecordType::Other(_) => MatchResult::NoMatch,
        }
    }

    pub fn execute(&self, request: &DnsRequest) -> DnsResponse {
        let query = &request.query;

        match self.resolve(query) {
            MatchResult::Address(address) => {
                debug!(name = %query.name, address = %address, "Synthesized address record");
                DnsResponse::answer(request, address)
            }
            MatchResult::NoMatch => {
                debug!(
                    name = %query.name,
                    record_type = %query.record_type,
                    class = %query.record_class,
                    "No encoded address, answering SERVFAIL"
                );
                DnsResponse::server_failure(request)
            }
        }
    }
}
