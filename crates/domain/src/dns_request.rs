use super::DnsQuery;

/// An inbound query message reduced to what a reply has to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRequest {
    pub id: u16,
    pub recursion_desired: bool,
    pub checking_disabled: bool,
    pub query: DnsQuery,
}

impl DnsRequest {
    pub fn new(id: u16, query: DnsQuery) -> Self {
        Self {
            id,
            recursion_desired: false,
            checking_disabled: false,
            query,
        }
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn with_checking_disabled(mut self, checking_disabled: bool) -> Self {
        self.checking_disabled = checking_disabled;
        self
    }
}
