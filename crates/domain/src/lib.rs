//! ec2-dns Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod dns_response;
pub mod errors;
pub mod match_result;

pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ResolverConfig, ServerConfig,
};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsClass, DnsRecord, RecordType, ANSWER_TTL};
pub use dns_request::DnsRequest;
pub use dns_response::{DnsResponse, ResponseCode};
pub use errors::DomainError;
pub use match_result::MatchResult;
