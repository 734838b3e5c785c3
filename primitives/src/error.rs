//! Error types for the primitives layer.

use alloc::string::String;

/// Errors raised while encoding, decoding or signing transactions.
///
/// Private key material never appears in any variant; `InvalidKey` only
/// describes what was wrong with the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The private key is not valid hex or not a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The signing algorithm failed to produce a signature.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A hex string could not be decoded.
    #[error("invalid hex {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Protobuf encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The envelope names a crypto scheme this crate cannot produce or check.
    #[error("unsupported crypto scheme tag {0}")]
    UnsupportedScheme(i32),
}

/// Convenience result type for the primitives layer.
pub type Result<T> = core::result::Result<T, Error>;
