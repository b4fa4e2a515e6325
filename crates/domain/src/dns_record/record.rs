use super::{DnsClass, RecordType};
use std::net::Ipv4Addr;

/// TTL on every synthesized answer. The address is derived from the name on
/// each query, so downstream resolvers must not cache it.
pub const ANSWER_TTL: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub record_type: RecordType,

    pub record_class: DnsClass,

    pub ttl: u32,

    pub address: Ipv4Addr,
}

impl DnsRecord {
    pub fn a(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            record_class: DnsClass::Internet,
            ttl: ANSWER_TTL,
            address,
        }
    }
}
