//! Transaction submission.
//!
//! `submit` hex-encodes serialized envelope bytes, sends them with
//! `cita_sendTransaction` and maps the node's `{status, hash}` reply:
//! `"OK"` is the only success, anything else is a `RemoteRejection`
//! carrying the literal status. Submission is not idempotent and is
//! never retried here; resubmitting a signed transaction is the caller's
//! decision.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tessera_primitives::types::decode_hex;
use tessera_primitives::{serialize_envelope, sign_envelope, Transaction};

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::transport::{Transport, SEND_TRANSACTION_METHOD};

/// Status string the node uses for an accepted transaction.
pub const STATUS_OK: &str = "OK";

/// The node's reply to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionResult {
    pub status: String,
    #[serde(default)]
    pub hash: String,
}

impl SubmissionResult {
    /// Returns true if the node accepted the transaction.
    pub fn is_accepted(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The transaction hash, or `RemoteRejection` if not accepted.
    pub fn into_hash(self) -> Result<TxHash> {
        if self.is_accepted() {
            Ok(TxHash(self.hash))
        } else {
            Err(ClientError::RemoteRejection {
                status: self.status,
            })
        }
    }
}

/// Transaction hash exactly as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Raw hash bytes, accepting the node's hex with or without `0x`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(decode_hex(&self.0)?)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T: Transport> Client<T> {
    /// Submit already-serialized envelope bytes.
    pub fn submit(&self, envelope_bytes: &[u8]) -> Result<TxHash> {
        tracing::debug!(
            method = SEND_TRANSACTION_METHOD,
            envelope_len = envelope_bytes.len(),
            "submitting transaction"
        );
        let response = self
            .transport()
            .send_request(SEND_TRANSACTION_METHOD, vec![Value::String(hex::encode(envelope_bytes))])?;

        let result: SubmissionResult = response.get_object()?;
        match result.into_hash() {
            Ok(hash) => {
                tracing::info!(tx_hash = %hash, "transaction accepted");
                Ok(hash)
            }
            Err(err) => {
                tracing::warn!(error = %err, "transaction rejected");
                Err(err)
            }
        }
    }

    /// Sign `tx` with `private_key_hex` and submit it.
    pub fn send_transaction(&self, tx: Transaction, private_key_hex: &str) -> Result<TxHash> {
        let envelope = sign_envelope(tx, private_key_hex)?;
        self.submit(&serialize_envelope(&envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::MockTransport;
    use serde_json::json;
    use tessera_primitives::envelope::deserialize_envelope;

    const KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn sample_tx() -> Transaction {
        Transaction {
            nonce: "7".into(),
            quota: 50_000,
            valid_until_block: 10,
            data: vec![0x60, 0x80, 0x60, 0x40],
            chain_id: 1,
            ..Transaction::default()
        }
    }

    #[test]
    fn test_accepted_returns_hash_verbatim() {
        let mock = MockTransport::new();
        mock.push_result(json!({"status": "OK", "hash": "0x01"}));
        let client = Client::new(&mock);

        let hash = client.submit(&[0xab, 0xcd]).unwrap();
        assert_eq!(hash.as_str(), "0x01");

        let req = mock.last_request().unwrap();
        assert_eq!(req.method, "cita_sendTransaction");
        assert_eq!(req.params, vec![json!("abcd")]);
    }

    #[test]
    fn test_rejection_carries_status() {
        let mock = MockTransport::new();
        mock.push_result(json!({"status": "Error", "hash": ""}));
        let client = Client::new(&mock);

        match client.submit(&[0x00]) {
            Err(ClientError::RemoteRejection { status }) => assert_eq!(status, "Error"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let mock = MockTransport::new();
        mock.push_result(json!({"status": "ok", "hash": "0x02"}));
        let client = Client::new(&mock);
        assert!(matches!(
            client.submit(&[0x00]),
            Err(ClientError::RemoteRejection { .. })
        ));
    }

    #[test]
    fn test_transport_error_passthrough() {
        let mock = MockTransport::new();
        mock.push_error(TransportError::Http("connection refused".into()));
        let client = Client::new(&mock);
        match client.submit(&[0x00]) {
            Err(ClientError::Transport(TransportError::Http(msg))) => {
                assert_eq!(msg, "connection refused")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_reply_is_decode_error() {
        let mock = MockTransport::new();
        mock.push_result(json!("0x1234"));
        let client = Client::new(&mock);
        assert!(matches!(client.submit(&[0x00]), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_send_transaction_submits_signed_envelope() {
        let mock = MockTransport::new();
        mock.push_result(json!({"status": "OK", "hash": "0xfeed"}));
        let client = Client::new(&mock);

        let hash = client.send_transaction(sample_tx(), KEY).unwrap();
        assert_eq!(hash.to_string(), "0xfeed");
        assert_eq!(hash.to_bytes().unwrap(), vec![0xfe, 0xed]);

        let req = mock.last_request().unwrap();
        let hex_envelope = req.params[0].as_str().unwrap();
        assert!(!hex_envelope.starts_with("0x"));
        let envelope = deserialize_envelope(&hex::decode(hex_envelope).unwrap()).unwrap();
        assert_eq!(envelope.transaction, sample_tx());
    }

    #[test]
    fn test_send_transaction_bad_key_sends_nothing() {
        let mock = MockTransport::new();
        let client = Client::new(&mock);
        let err = client.send_transaction(sample_tx(), "0x1234").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Primitive(tessera_primitives::Error::InvalidKey(_))
        ));
        assert!(mock.requests().is_empty());
    }
}
