//! Protobuf wire messages accepted by the chain's transaction pool.
//!
//! These mirror the node's `blockchain.proto` schema field for field:
//!
//! ```text
//! message Transaction {
//!     string to = 1;
//!     string nonce = 2;
//!     uint64 quota = 3;
//!     uint64 valid_until_block = 4;
//!     bytes data = 5;
//!     bytes value = 6;
//!     uint32 chain_id = 7;
//!     uint32 version = 8;
//! }
//!
//! enum Crypto { SECP = 0; SM2 = 1; }
//!
//! message UnverifiedTransaction {
//!     Transaction transaction = 1;
//!     bytes signature = 2;
//!     Crypto crypto = 3;
//! }
//! ```
//!
//! Tag numbers and scalar types are a compatibility contract with the
//! remote validator. Do not renumber.

use alloc::string::String;
use alloc::vec::Vec;

/// Unsigned transaction as it appears on the wire.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Transaction {
    /// Recipient address as lowercase hex without prefix; empty for deployments.
    #[prost(string, tag = "1")]
    pub to: String,
    #[prost(string, tag = "2")]
    pub nonce: String,
    #[prost(uint64, tag = "3")]
    pub quota: u64,
    #[prost(uint64, tag = "4")]
    pub valid_until_block: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub data: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub value: Vec<u8>,
    #[prost(uint32, tag = "7")]
    pub chain_id: u32,
    #[prost(uint32, tag = "8")]
    pub version: u32,
}

/// Signature scheme tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Crypto {
    Secp = 0,
    Sm2 = 1,
}

/// Transaction plus signature, the unit submitted to the node.
#[derive(Clone, PartialEq, prost::Message)]
pub struct UnverifiedTransaction {
    #[prost(message, optional, tag = "1")]
    pub transaction: Option<Transaction>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
    #[prost(enumeration = "Crypto", tag = "3")]
    pub crypto: i32,
}
