//! `tessera-client` — submit, call and deploy against a CITA-style node.
//!
//! The client is a thin, stateless layer over a JSON-RPC transport:
//! transactions are built from [`tessera_primitives::TransactParams`],
//! signed into an envelope, hex-encoded and sent with
//! `cita_sendTransaction`. Reads go through `eth_call` and `eth_getAbi`.
//!
//! ## Architecture
//!
//! - [`transport::Transport`] — trait abstracting one JSON-RPC round trip
//! - [`transport::MockTransport`] — scripted, recording implementation for testing
//! - [`http::HttpTransport`] — JSON-RPC 2.0 over blocking HTTP
//! - [`submitter`] — envelope submission and status mapping
//! - [`caller`] — `code_at` and read-only `call`
//! - [`deployer`] — `deploy`, `transact` and `store_abi`
//! - [`config`] / [`logging`] — environment-driven configuration and `tracing` setup

pub mod error;
pub mod config;
pub mod logging;
pub mod transport;
pub mod http;
pub mod client;
pub mod submitter;
pub mod caller;
pub mod deployer;

// Re-export key types for convenience
pub use caller::{BlockTag, CallRequest};
pub use client::Client;
pub use config::ClientConfig;
pub use deployer::{PendingDeployment, ABI_STORE_ADDRESS};
pub use error::{ClientError, Result, TransportError};
pub use http::HttpTransport;
pub use logging::init_tracing;
pub use submitter::{SubmissionResult, TxHash, STATUS_OK};
pub use transport::{
    MockTransport, Response, Transport, ETH_CALL_METHOD, GET_ABI_METHOD, SEND_TRANSACTION_METHOD,
};
