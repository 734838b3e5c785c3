//! `tessera-primitives` — foundational types for the Tessera transaction client.
//!
//! This crate provides the transaction data model, the canonical protobuf
//! encoding that validators hash and verify, secp256k1 signing, and the
//! signed envelope that is handed to the transport layer.
//!
//! Supports `#![no_std]` with `alloc` (use `default-features = false`), so
//! signing can run on hosts without an operating system.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod proto;
pub mod transaction;
pub mod codec;
pub mod crypto;
pub mod envelope;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Address, CryptoScheme, Hash, Signature, SIGNATURE_LEN};
pub use error::{Error, Result};
pub use transaction::{TransactParams, Transaction};
pub use envelope::{build_envelope, serialize_envelope, sign_envelope, Envelope};
pub use crypto::{sign_transaction, SigningKey, VerifyingKey};
