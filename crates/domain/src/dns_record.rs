pub mod class;
pub mod record;
pub mod record_type;

pub use class::DnsClass;
pub use record::{DnsRecord, ANSWER_TTL};
pub use record_type::RecordType;
