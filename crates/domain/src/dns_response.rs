use super::{DnsQuery, DnsRecord, DnsRequest};
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    ServFail,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::ServFail => "SERVFAIL",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound reply to a single [`DnsRequest`].
///
/// Built fresh for each request through [`DnsResponse::answer`] or
/// [`DnsResponse::server_failure`]; the header fields are mirrored from the
/// request and the question is echoed unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub recursion_desired: bool,
    pub checking_disabled: bool,
    pub authoritative: bool,
    pub response_code: ResponseCode,
    pub query: DnsQuery,
    pub answers: Vec<DnsRecord>,
}

impl DnsResponse {
    /// Authoritative answer carrying one A record named exactly like the query.
    pub fn answer(request: &DnsRequest, address: Ipv4Addr) -> Self {
        let record = DnsRecord::a(request.query.name.to_string(), address);
        Self {
            authoritative: true,
            response_code: ResponseCode::NoError,
            answers: vec![record],
            ..Self::reply_to(request)
        }
    }

    /// SERVFAIL with no answers. Callers treat this server as not
    /// authoritative for the name and move on.
    pub fn server_failure(request: &DnsRequest) -> Self {
        Self {
            response_code: ResponseCode::ServFail,
            ..Self::reply_to(request)
        }
    }

    fn reply_to(request: &DnsRequest) -> Self {
        Self {
            id: request.id,
            recursion_desired: request.recursion_desired,
            checking_disabled: request.checking_disabled,
            authoritative: false,
            response_code: ResponseCode::NoError,
            query: request.query.clone(),
            answers: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == ResponseCode::NoError && !self.answers.is_empty()
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        self.answers.first().map(|record| record.address)
    }
}
