//! Transaction model and the parameter bundle used to build and sign one.
//!
//! A `Transaction` is created by the caller, encoded once by
//! [`crate::codec`], hashed and signed by [`crate::crypto`], and dropped
//! after submission. Nothing here is cached across submissions: each one
//! carries its own nonce and validity window.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::types::Address;

/// An unsigned transaction.
///
/// `to == None` marks a contract deployment, in which case `data` is the
/// contract bytecode. Otherwise `data` is the call data for `to`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    /// Recipient, absent for contract creation.
    pub to: Option<Address>,
    /// Caller-chosen replay token. Uniqueness is the caller's problem.
    pub nonce: String,
    /// Execution quota (gas) the sender is willing to spend.
    pub quota: u64,
    /// Last block height at which the transaction may be included.
    pub valid_until_block: u64,
    /// Call data or contract bytecode.
    pub data: Vec<u8>,
    /// Transferred value as big-endian bytes; empty means zero.
    pub value: Vec<u8>,
    /// Chain identifier the signature is bound to.
    pub chain_id: u32,
    /// Transaction format version; 0 for the first format.
    pub version: u32,
}

impl Transaction {
    /// Returns true if this transaction creates a contract.
    pub fn is_deployment(&self) -> bool {
        self.to.is_none()
    }
}

/// Everything needed to build and sign one transaction.
///
/// Owned by the caller and consumed per submission. The private key is
/// kept as hex (with or without `0x`) and is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct TransactParams {
    pub valid_until_block: u64,
    pub chain_id: u32,
    pub nonce: String,
    pub quota: u64,
    pub private_key_hex: String,
}

impl TransactParams {
    /// Build a transaction to `to` (or a deployment when `None`) carrying `data`.
    pub fn transaction(&self, to: Option<Address>, data: Vec<u8>) -> Transaction {
        Transaction {
            to,
            nonce: self.nonce.clone(),
            quota: self.quota,
            valid_until_block: self.valid_until_block,
            data,
            chain_id: self.chain_id,
            ..Transaction::default()
        }
    }
}

impl fmt::Debug for TransactParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactParams")
            .field("valid_until_block", &self.valid_until_block)
            .field("chain_id", &self.chain_id)
            .field("nonce", &self.nonce)
            .field("quota", &self.quota)
            .field("private_key_hex", &"<redacted>")
            .finish()
    }
}
