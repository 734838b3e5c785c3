//! Canonical serialization of transactions and envelopes.
//!
//! The bytes produced here are what the signer hashes and what every
//! validator re-hashes to check the signature, so they must be
//! reproducible bit for bit. Encoding is proto3 via `prost`:
//! - Fields are written in ascending tag order
//! - Scalar fields holding their default value (0, "", empty bytes) are omitted
//! - Integers are varints
//! - `to` is the lowercase hex of the address with no prefix, or omitted
//!   for deployments
//!
//! See [`crate::proto`] for the schema.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use prost::Message;

use crate::error::{Error, Result};
use crate::proto;
use crate::transaction::Transaction;
use crate::types::{decode_hex, Address, ADDRESS_LEN};

// ── Transaction ──

/// Convert a transaction into its wire message.
pub fn to_wire(tx: &Transaction) -> proto::Transaction {
    proto::Transaction {
        to: tx.to.as_ref().map(address_to_wire).unwrap_or_default(),
        nonce: tx.nonce.clone(),
        quota: tx.quota,
        valid_until_block: tx.valid_until_block,
        data: tx.data.clone(),
        value: tx.value.clone(),
        chain_id: tx.chain_id,
        version: tx.version,
    }
}

/// Convert a wire message back into a transaction.
///
/// Accepts `to` with or without a `0x` prefix; an empty `to` is a deployment.
pub fn from_wire(wire: proto::Transaction) -> Result<Transaction> {
    let to = if wire.to.is_empty() {
        None
    } else {
        Some(parse_address(&wire.to)?)
    };
    Ok(Transaction {
        to,
        nonce: wire.nonce,
        quota: wire.quota,
        valid_until_block: wire.valid_until_block,
        data: wire.data,
        value: wire.value,
        chain_id: wire.chain_id,
        version: wire.version,
    })
}

/// Encode a `Transaction` to its canonical bytes.
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    to_wire(tx).encode_to_vec()
}

/// Decode a `Transaction` from canonical bytes.
pub fn decode_transaction(data: &[u8]) -> Result<Transaction> {
    let wire = proto::Transaction::decode(data)
        .map_err(|e| Error::Serialization(format!("transaction: {}", e)))?;
    from_wire(wire)
}

// ── Envelope ──

/// Encode an `UnverifiedTransaction` wire message.
pub fn encode_unverified(envelope: &proto::UnverifiedTransaction) -> Vec<u8> {
    envelope.encode_to_vec()
}

/// Decode an `UnverifiedTransaction` wire message.
pub fn decode_unverified(data: &[u8]) -> Result<proto::UnverifiedTransaction> {
    proto::UnverifiedTransaction::decode(data)
        .map_err(|e| Error::Serialization(format!("unverified transaction: {}", e)))
}

fn parse_address(input: &str) -> Result<Address> {
    let bytes = decode_hex(input)?;
    if bytes.len() != ADDRESS_LEN {
        return Err(Error::Serialization(format!(
            "recipient must be {} bytes, got {}",
            ADDRESS_LEN,
            bytes.len()
        )));
    }
    Ok(Address::from_slice(&bytes))
}

/// Lowercase, unprefixed hex of an address as carried in `proto::Transaction::to`.
pub fn address_to_wire(addr: &Address) -> String {
    hex::encode(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample_deploy() -> Transaction {
        Transaction {
            to: None,
            nonce: "1".into(),
            quota: 1_000_000,
            valid_until_block: 100,
            data: vec![0x60, 0x80],
            value: Vec::new(),
            chain_id: 1,
            version: 0,
        }
    }

    fn sample_call() -> Transaction {
        Transaction {
            to: Some(Address::repeat_byte(0x11)),
            ..sample_deploy()
        }
    }

    #[test]
    fn test_deploy_known_bytes() {
        // 12 01 31          nonce = "1"
        // 18 c0 84 3d       quota = 1_000_000
        // 20 64             valid_until_block = 100
        // 2a 02 60 80       data
        // 38 01             chain_id = 1
        let encoded = encode_transaction(&sample_deploy());
        assert_eq!(hex::encode(&encoded), "12013118c0843d20642a0260803801");
    }

    #[test]
    fn test_recipient_is_first_field() {
        let encoded = encode_transaction(&sample_call());
        assert_eq!(encoded[0], 0x0a);
        assert_eq!(encoded[1], 40);
        assert_eq!(&encoded[2..42], "11".repeat(20).as_bytes());
        assert_eq!(&encoded[42..], &encode_transaction(&sample_deploy())[..]);
    }

    #[test]
    fn test_deterministic() {
        let tx = sample_call();
        let enc1 = encode_transaction(&tx);
        let enc2 = encode_transaction(&tx.clone());
        assert_eq!(enc1, enc2, "encoding must be deterministic");
    }

    #[test]
    fn test_default_fields_omitted() {
        assert!(encode_transaction(&Transaction::default()).is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let mut tx = sample_call();
        tx.value = vec![0x01, 0x00];
        tx.version = 1;
        let decoded = decode_transaction(&encode_transaction(&tx)).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_from_wire_accepts_prefixed_recipient() {
        let wire = proto::Transaction {
            to: format!("0x{}", "ab".repeat(20)),
            ..proto::Transaction::default()
        };
        let tx = from_wire(wire).unwrap();
        assert_eq!(tx.to, Some(Address::repeat_byte(0xab)));
    }

    #[test]
    fn test_from_wire_rejects_short_recipient() {
        let wire = proto::Transaction {
            to: "abcd".into(),
            ..proto::Transaction::default()
        };
        assert!(matches!(from_wire(wire), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_decode_truncated_data() {
        // Length prefix claims 40 bytes but only 2 follow.
        assert!(decode_transaction(&[0x0a, 0x28, 0x31, 0x31]).is_err());
    }
}
