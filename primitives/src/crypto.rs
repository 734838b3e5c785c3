//! Cryptographic operations for transaction signing.
//!
//! - SHA3-256 (FIPS 202) over the canonical transaction bytes is the
//!   signing digest. The validator recomputes it, so it never varies.
//! - Signatures are deterministic ECDSA (RFC 6979) over secp256k1, in
//!   recoverable `r ‖ s ‖ v` form.
//! - Keccak-256 is used only to derive account addresses from public keys.
//!
//! No operation here uses randomness, and key material is never copied
//! into errors.

use alloc::format;
use alloc::string::ToString;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature};
use sha3::{Digest, Keccak256, Sha3_256};

pub use k256::ecdsa::{SigningKey, VerifyingKey};

use crate::codec::encode_transaction;
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use crate::types::{decode_hex, Address, Hash, Signature, PRIVATE_KEY_LEN, SIGNATURE_LEN};

/// Compute the SHA3-256 hash of the input data.
pub fn hash_sha3_256(data: &[u8]) -> Hash {
    let result = Sha3_256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Compute the Keccak-256 hash of the input data.
pub fn hash_keccak256(data: &[u8]) -> Hash {
    let result = Keccak256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Digest a transaction is signed over.
pub fn transaction_hash(tx: &Transaction) -> Hash {
    hash_sha3_256(&encode_transaction(tx))
}

/// Parse a hex private key, with or without `0x`.
///
/// The key must decode to exactly 32 bytes and be a valid non-zero scalar
/// below the curve order.
pub fn parse_signing_key(private_key_hex: &str) -> Result<SigningKey> {
    let bytes = decode_hex(private_key_hex)
        .map_err(|_| Error::InvalidKey("private key is not valid hex".into()))?;
    if bytes.len() != PRIVATE_KEY_LEN {
        return Err(Error::InvalidKey(format!(
            "expected {} bytes, got {}",
            PRIVATE_KEY_LEN,
            bytes.len()
        )));
    }
    SigningKey::from_slice(&bytes)
        .map_err(|_| Error::InvalidKey("not a valid secp256k1 scalar".into()))
}

/// Sign a 32-byte digest.
pub fn sign_hash(hash: &Hash, key: &SigningKey) -> Result<Signature> {
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(hash)
        .map_err(|e| Error::Signing(e.to_string()))?;

    let mut raw = [0u8; SIGNATURE_LEN];
    raw[..64].copy_from_slice(&sig.to_bytes());
    raw[64] = recovery_id.to_byte();
    Ok(Signature::from_bytes(raw))
}

/// Sign a transaction with a hex private key.
///
/// Hashes the canonical encoding with SHA3-256 and signs the digest.
/// The same key and transaction always give the same signature.
pub fn sign_transaction(tx: &Transaction, private_key_hex: &str) -> Result<Signature> {
    let key = parse_signing_key(private_key_hex)?;
    sign_hash(&transaction_hash(tx), &key)
}

/// Recover the public key that produced `signature` over `hash`.
pub fn recover_from_hash(hash: &Hash, signature: &Signature) -> Result<VerifyingKey> {
    let sig = EcdsaSignature::from_slice(signature.compact())
        .map_err(|e| Error::Signing(e.to_string()))?;
    let recovery_id = RecoveryId::from_byte(signature.recovery_id()).ok_or_else(|| {
        Error::Signing(format!("invalid recovery id {}", signature.recovery_id()))
    })?;
    VerifyingKey::recover_from_prehash(hash, &sig, recovery_id)
        .map_err(|e| Error::Signing(e.to_string()))
}

/// Recover the signer of a transaction, as the validator does.
pub fn recover_signer(tx: &Transaction, signature: &Signature) -> Result<VerifyingKey> {
    recover_from_hash(&transaction_hash(tx), signature)
}

/// Verify a signature over a digest against a known public key.
///
/// Returns `true` if the signature is valid, `false` otherwise.
pub fn verify_hash(hash: &Hash, signature: &Signature, public_key: &VerifyingKey) -> bool {
    let Ok(sig) = EcdsaSignature::from_slice(signature.compact()) else {
        return false;
    };
    public_key.verify_prehash(hash, &sig).is_ok()
}

/// Verify a transaction signature against a known public key.
pub fn verify_transaction(tx: &Transaction, signature: &Signature, public_key: &VerifyingKey) -> bool {
    verify_hash(&transaction_hash(tx), signature, public_key)
}

/// Account address of a public key: last 20 bytes of Keccak-256 over the
/// uncompressed point without its `0x04` tag.
pub fn address_of(public_key: &VerifyingKey) -> Address {
    let point = public_key.to_encoded_point(false);
    let hash = hash_keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
