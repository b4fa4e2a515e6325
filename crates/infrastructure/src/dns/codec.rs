//! Conversions between `hickory` message types and the domain types.
//!
//! Wire parsing, framing and serialization belong to `hickory-server`; this
//! module only maps a received question into a [`DnsRequest`] and lays a
//! [`DnsResponse`] out as a reply header plus answer records.

use ec2_dns_domain::{
    DnsClass, DnsQuery, DnsRecord, DnsRequest, DnsResponse, DomainError, RecordType, ResponseCode,
};
use hickory_proto::op::{Header, Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};

/// Build the domain request for one question.
///
/// The name is taken from the question as received, so case and the trailing
/// dot survive into the answer record.
pub fn to_domain_request(header: &Header, question: &Query) -> DnsRequest {
    let query = DnsQuery::new(
        question.name().to_ascii(),
        DnsClass::from_u16(u16::from(question.query_class())),
        RecordType::from_u16(u16::from(question.query_type())),
    );

    DnsRequest::new(header.id(), query)
        .with_recursion_desired(header.recursion_desired())
        .with_checking_disabled(header.checking_disabled())
}

/// Reply header for `response`: id, opcode, RD and CD mirror the request.
pub fn response_header(request_header: &Header, response: &DnsResponse) -> Header {
    let mut header = Header::response_from_request(request_header);
    header
        .set_id(response.id)
        .set_recursion_desired(response.recursion_desired)
        .set_checking_disabled(response.checking_disabled)
        .set_authoritative(response.authoritative)
        .set_response_code(to_hickory_response_code(response.response_code));
    header
}

pub fn answer_records(response: &DnsResponse) -> Result<Vec<Record>, DomainError> {
    response.answers.iter().map(to_hickory_record).collect()
}

pub fn to_hickory_response_code(code: ResponseCode) -> HickoryResponseCode {
    match code {
        ResponseCode::NoError => HickoryResponseCode::NoError,
        ResponseCode::ServFail => HickoryResponseCode::ServFail,
    }
}

fn to_hickory_record(record: &DnsRecord) -> Result<Record, DomainError> {
    let name = Name::from_ascii(&record.name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", record.name, e)))?;
    Ok(Record::from_rdata(name, record.ttl, RData::A(A(record.address))))
}
