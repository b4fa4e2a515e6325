#![allow(dead_code)]
use ec2_dns_application::{HostnameMatcher, RespondToQueryUseCase};
use ec2_dns_domain::{DnsClass, DnsQuery, DnsRequest, RecordType};
use std::sync::Arc;

pub fn matcher() -> HostnameMatcher {
    HostnameMatcher::new().expect("hostname pattern must compile")
}

pub fn use_case() -> RespondToQueryUseCase {
    RespondToQueryUseCase::new(Arc::new(matcher()))
}

pub struct DnsRequestBuilder {
    id: u16,
    name: String,
    record_class: DnsClass,
    record_type: RecordType,
    recursion_desired: bool,
}

impl DnsRequestBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: 42,
            name: name.to_string(),
            record_class: DnsClass::Internet,
            record_type: RecordType::A,
            recursion_desired: true,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn record_class(mut self, record_class: DnsClass) -> Self {
        self.record_class = record_class;
        self
    }

    pub fn build(self) -> DnsRequest {
        DnsRequest::new(
            self.id,
            DnsQuery::new(self.name, self.record_class, self.record_type),
        )
        .with_recursion_desired(self.recursion_desired)
    }
}
