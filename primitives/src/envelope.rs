//! Signed transaction envelopes ("unverified transactions").
//!
//! An envelope is a transaction plus its signature and the tag of the
//! scheme that produced it. It is serialized once and submitted once;
//! checking the signature is the validator's job, so nothing here
//! validates beyond the types.

use alloc::vec::Vec;

use crate::codec::{decode_unverified, encode_unverified, from_wire, to_wire};
use crate::crypto::sign_transaction;
use crate::error::{Error, Result};
use crate::proto;
use crate::transaction::Transaction;
use crate::types::{CryptoScheme, Signature};

/// A transaction together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub transaction: Transaction,
    pub signature: Signature,
    pub scheme: CryptoScheme,
}

/// Wrap a transaction and its signature.
pub fn build_envelope(transaction: Transaction, signature: Signature, scheme: CryptoScheme) -> Envelope {
    Envelope {
        transaction,
        signature,
        scheme,
    }
}

/// Sign `transaction` with a hex private key and wrap it as a secp256k1 envelope.
pub fn sign_envelope(transaction: Transaction, private_key_hex: &str) -> Result<Envelope> {
    let signature = sign_transaction(&transaction, private_key_hex)?;
    Ok(build_envelope(transaction, signature, CryptoScheme::Secp))
}

/// Serialize an envelope to its protobuf bytes.
pub fn serialize_envelope(envelope: &Envelope) -> Vec<u8> {
    let wire = proto::UnverifiedTransaction {
        transaction: Some(to_wire(&envelope.transaction)),
        signature: envelope.signature.to_vec(),
        crypto: envelope.scheme.as_i32(),
    };
    encode_unverified(&wire)
}

/// Parse envelope bytes produced by [`serialize_envelope`].
pub fn deserialize_envelope(data: &[u8]) -> Result<Envelope> {
    let wire = decode_unverified(data)?;
    let scheme = CryptoScheme::from_i32(wire.crypto)?;
    let transaction = wire
        .transaction
        .ok_or_else(|| Error::Serialization("envelope has no transaction".into()))
        .and_then(from_wire)?;
    let signature = Signature::from_slice(&wire.signature)?;
    Ok(build_envelope(transaction, signature, scheme))
}
