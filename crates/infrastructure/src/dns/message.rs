//! Wire-format helpers for health-probe queries.
//!
//! A probe is a single-question recursive A query built with
//! `hickory-proto`; the response is accepted as soon as it parses, matches
//! the query ID, and carries at least one answer.

use failsafe_dns_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Build an A query for `domain` and serialize it to wire format.
///
/// Returns the message ID alongside the bytes so the caller can match the
/// response against the query it sent.
pub fn build_probe_query(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
    let name = Name::from_str(domain).map_err(|e| {
        DomainError::InvalidProbeDomain(format!("Invalid domain '{}': {}", domain, e))
    })?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let id = fastrand::u16(..);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.metadata.recursion_desired = true;
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidProbeDomain(format!("Failed to serialize DNS query: {}", e))
    })?;

    Ok((id, buf))
}

/// Check that `bytes` is a usable answer to the probe with `expected_id`.
///
/// Usable means: parseable, matching ID, NOERROR, and a non-empty answer
/// section. The error string names the reason for the probe log.
pub fn check_probe_response(bytes: &[u8], expected_id: u16) -> Result<(), String> {
    let message = Message::from_vec(bytes).map_err(|e| format!("unparseable response: {}", e))?;

    if message.id != expected_id {
        return Err(format!(
            "response ID {} does not match query ID {}",
            message.id,
            expected_id
        ));
    }

    match message.response_code {
        ResponseCode::NoError => {}
        code => return Err(format!("server answered {}", code)),
    }

    if message.answers.is_empty() {
        return Err("empty answer section".to_string());
    }

    Ok(())
}
