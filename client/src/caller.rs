//! Read-only contract access: code/ABI lookup and `eth_call`.
//!
//! Block numbers travel as a text token: `"latest"` when absent,
//! otherwise lowercase hex with no `0x` (255 → `"ff"`).

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tessera_primitives::types::encode_hex_prefixed;
use tessera_primitives::Address;

use crate::client::Client;
use crate::error::Result;
use crate::transport::{Transport, ETH_CALL_METHOD, GET_ABI_METHOD};

/// Block a read is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    #[default]
    Latest,
    Number(u64),
}

impl From<Option<u64>> for BlockTag {
    fn from(number: Option<u64>) -> Self {
        number.map_or(Self::Latest, Self::Number)
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Number(n) => write!(f, "{:x}", n),
        }
    }
}

/// A read-only invocation.
///
/// `from` may be the zero address for pure reads. `to` must be set for a
/// real call; `None` is sent as an empty string and the node will reject
/// or ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallRequest {
    pub from: Address,
    pub to: Option<Address>,
    pub data: Vec<u8>,
}

impl CallRequest {
    /// JSON params object `{from, to, data}` sent with `eth_call`.
    pub fn to_params(&self) -> Value {
        json!({
            "from": self.from.to_checksum(None),
            "to": self.to.map(|to| to.to_checksum(None)).unwrap_or_default(),
            "data": encode_hex_prefixed(&self.data),
        })
    }
}

impl<T: Transport> Client<T> {
    /// Code/ABI stored for `contract`, as the node returns it.
    ///
    /// An empty string means nothing is stored at that address.
    pub fn code_at(&self, contract: Address, block_number: Option<u64>) -> Result<String> {
        let block = BlockTag::from(block_number);
        let address = contract.to_checksum(None);
        tracing::debug!(method = GET_ABI_METHOD, %address, %block, "code lookup");

        let response = self.transport().send_request(
            GET_ABI_METHOD,
            vec![Value::String(address), Value::String(block.to_string())],
        )?;
        response.get_string()
    }

    /// Execute a read-only call and decode the result into `R`.
    pub fn call<R: DeserializeOwned>(&self, request: &CallRequest, block_number: Option<u64>) -> Result<R> {
        let block = BlockTag::from(block_number);
        let params = request.to_params();
        tracing::debug!(method = ETH_CALL_METHOD, %params, %block, "contract call");

        let response = self
            .transport()
            .send_request(ETH_CALL_METHOD, vec![params, Value::String(block.to_string())])?;
        response.get_object()
    }
}
