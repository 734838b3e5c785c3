//! Shared test helpers for integration tests.
//!
//! Provides a deterministic signing key, sample transactions and a
//! scripted client used across all integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use alloy_json_abi::JsonAbi;
use serde_json::json;
use tessera_client::{Client, MockTransport};
use tessera_primitives::envelope::deserialize_envelope;
use tessera_primitives::{Address, Envelope, TransactParams, Transaction};

// ── Deterministic Keys ──

/// Well-known secp256k1 test key.
pub const ALICE_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Address derived from [`ALICE_KEY`].
pub fn alice_address() -> Address {
    "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23".parse().unwrap()
}

/// A second key, for tests that need two signers.
pub const BOB_KEY: &str = "0202020202020202020202020202020202020202020202020202020202020202";

pub fn token_contract() -> Address {
    Address::repeat_byte(0xab)
}

// ── Transactions ──

/// Call params with a fixed nonce and limits.
pub fn params(nonce: &str, key: &str) -> TransactParams {
    TransactParams {
        valid_until_block: 100,
        chain_id: 1,
        nonce: nonce.to_string(),
        quota: 1_000_000,
        private_key_hex: key.to_string(),
    }
}

/// The deployment used by the golden vectors: bytecode `0x6080`, nonce `"1"`.
pub fn deploy_tx() -> Transaction {
    params("1", ALICE_KEY).transaction(None, vec![0x60, 0x80])
}

/// A call to [`token_contract`] with `balanceOf`-style call data.
pub fn call_tx(nonce: &str) -> Transaction {
    params(nonce, ALICE_KEY).transaction(Some(token_contract()), vec![0x70, 0xa0, 0x82, 0x31])
}

pub fn sample_abi() -> JsonAbi {
    serde_json::from_value(json!([
        {
            "type": "constructor",
            "inputs": [{"name": "supply", "type": "uint256", "internalType": "uint256"}],
            "stateMutability": "nonpayable"
        },
        {
            "type": "function",
            "name": "balanceOf",
            "inputs": [{"name": "owner", "type": "address", "internalType": "address"}],
            "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
            "stateMutability": "view"
        }
    ]))
    .unwrap()
}

// ── Client Factory ──

/// A client over a shared mock so tests can inspect what was sent.
pub fn mock_client() -> (Client<Arc<MockTransport>>, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    (Client::new(mock.clone()), mock)
}

/// Queue an accepted submission reply.
pub fn accept(mock: &MockTransport, hash: &str) {
    mock.push_result(json!({"status": "OK", "hash": hash}));
}

/// Decode the envelope carried by the `index`-th recorded submission.
pub fn submitted_envelope(mock: &MockTransport, index: usize) -> Envelope {
    let requests = mock.requests();
    let hex_envelope = requests[index].params[0].as_str().unwrap().to_string();
    deserialize_envelope(&hex::decode(hex_envelope).unwrap()).unwrap()
}

/// Decode a hex string from a vector file.
pub fn unhex(input: &str) -> Vec<u8> {
    hex::decode(input.trim_start_matches("0x")).unwrap()
}
