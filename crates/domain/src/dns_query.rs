use super::{DnsClass, RecordType};
use std::sync::Arc;

/// A single DNS question. The name is kept exactly as it arrived on the
/// wire, including case and the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_class: DnsClass,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_class: DnsClass, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_class,
            record_type,
        }
    }

    pub fn internet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, DnsClass::Internet, record_type)
    }
}
