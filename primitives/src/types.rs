//! Core type aliases, constants and hex helpers shared by the client crates.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};

/// 20-byte account address.
pub use alloy_primitives::Address;

/// 32-byte digest of the canonical transaction bytes.
pub type Hash = [u8; 32];

/// Length of an account address.
pub const ADDRESS_LEN: usize = 20;

/// Length of a recoverable secp256k1 signature: `r (32) ‖ s (32) ‖ v (1)`.
pub const SIGNATURE_LEN: usize = 65;

/// Length of a raw secp256k1 private key.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Recoverable signature over the SHA3-256 hash of a transaction.
///
/// Layout is `r ‖ s ‖ v` with `v` the recovery id (0 or 1), the form
/// validators use to recover the sender.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Wrap raw signature bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a signature from a slice, which must be exactly 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            Error::Serialization(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The `r ‖ s` part of the signature.
    pub fn compact(&self) -> &[u8] {
        &self.0[..64]
    }

    /// The recovery id byte.
    pub fn recovery_id(&self) -> u8 {
        self.0[64]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", encode_hex_prefixed(&self.0))
    }
}

/// Signature algorithm tag carried in the envelope.
///
/// Validators pick their verification routine from this tag, so it must
/// match the algorithm that actually produced the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoScheme {
    /// ECDSA over secp256k1.
    #[default]
    Secp,
}

impl CryptoScheme {
    /// Wire tag of the scheme.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Secp => crate::proto::Crypto::Secp as i32,
        }
    }

    /// Map a wire tag back to a supported scheme.
    pub fn from_i32(tag: i32) -> Result<Self> {
        match crate::proto::Crypto::try_from(tag) {
            Ok(crate::proto::Crypto::Secp) => Ok(Self::Secp),
            _ => Err(Error::UnsupportedScheme(tag)),
        }
    }
}

// ── Hex helpers ──

/// Strip a leading `0x` / `0X` if present.
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Prepend `0x` unless the string already carries it.
pub fn add_hex_prefix(input: &str) -> String {
    if input.starts_with("0x") || input.starts_with("0X") {
        input.to_string()
    } else {
        format!("0x{}", input)
    }
}

/// Decode a hex string with or without the `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(input)).map_err(|e| Error::InvalidHex {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Lowercase hex with a `0x` prefix.
pub fn encode_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
