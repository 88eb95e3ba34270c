//! DNS probe message construction and reply matching.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nameserver_sort_domain::DomainError;
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive A query with a random ID and return `(id, bytes)`.
    pub fn build_probe_query(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidConfiguration(format!("Invalid probe domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// True when `bytes` is a well-formed DNS response carrying `id`.
    ///
    /// Any response code counts: the probe measures reachability only.
    pub fn is_reply_to(bytes: &[u8], id: u16) -> bool {
        if bytes.len() < 12 {
            return false;
        }
        let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let is_response = bytes[2] & 0x80 == 0x80;

        wire_id == id && is_response && Message::from_vec(bytes).is_ok()
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidConfiguration(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
