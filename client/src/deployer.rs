//! Contract deployment and other signed writes.
//!
//! Each operation builds a fresh `Transaction` from `TransactParams`,
//! signs it and submits it through [`Client::send_transaction`]. Errors
//! from signing and submission are returned unchanged.
//!
//! Deployment stops at the transaction hash. Resolving the contract
//! address needs a receipt lookup, which the caller owns.

use alloy_json_abi::JsonAbi;
use tessera_primitives::types::{decode_hex, encode_hex_prefixed};
use tessera_primitives::{Address, Error as PrimitiveError, TransactParams};

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::submitter::TxHash;
use crate::transport::Transport;

/// System address that stores contract ABIs for `eth_getAbi`.
pub const ABI_STORE_ADDRESS: Address = Address::repeat_byte(0xaa);

/// A submitted deployment awaiting its receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDeployment {
    /// Hash of the contract-creation transaction.
    pub tx_hash: TxHash,
    /// ABI to bind once the receipt yields the contract address.
    pub abi: JsonAbi,
}

/// Decode caller-supplied hex bytecode or call data.
pub fn decode_code(code_hex: &str) -> Result<Vec<u8>> {
    decode_hex(code_hex).map_err(|err| match err {
        PrimitiveError::InvalidHex { input, reason } => ClientError::InvalidCode { input, reason },
        other => ClientError::Primitive(other),
    })
}

/// Payload for the ABI store: 20 address bytes followed by the compact JSON ABI.
pub fn abi_store_payload(contract: Address, abi: &JsonAbi) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(abi).map_err(|e| ClientError::Decode(e.to_string()))?;
    let mut data = Vec::with_capacity(contract.len() + json.len());
    data.extend_from_slice(contract.as_slice());
    data.extend_from_slice(&json);
    Ok(data)
}

impl<T: Transport> Client<T> {
    /// Publish contract bytecode as a transaction with no recipient.
    ///
    /// `code_hex` is the creation bytecode (constructor arguments already
    /// appended), with or without `0x`.
    pub fn deploy(&self, params: &TransactParams, abi: &JsonAbi, code_hex: &str) -> Result<PendingDeployment> {
        let code = decode_code(code_hex)?;
        tracing::debug!(
            code_len = code.len(),
            has_constructor = abi.constructor.is_some(),
            chain_id = params.chain_id,
            valid_until_block = params.valid_until_block,
            "deploying contract"
        );

        let tx = params.transaction(None, code);
        let tx_hash = self.send_transaction(tx, &params.private_key_hex)?;
        Ok(PendingDeployment {
            tx_hash,
            abi: abi.clone(),
        })
    }

    /// Send call data to an existing contract.
    pub fn transact(&self, params: &TransactParams, to: Address, data: Vec<u8>) -> Result<TxHash> {
        tracing::debug!(
            to = %to,
            data = %encode_hex_prefixed(&data),
            chain_id = params.chain_id,
            "sending contract transaction"
        );
        let tx = params.transaction(Some(to), data);
        self.send_transaction(tx, &params.private_key_hex)
    }

    /// Record `contract`'s ABI on chain so `code_at` can return it.
    pub fn store_abi(&self, params: &TransactParams, contract: Address, abi: &JsonAbi) -> Result<TxHash> {
        let data = abi_store_payload(contract, abi)?;
        self.transact(params, ABI_STORE_ADDRESS, data)
    }
}
