//! The client handle tying operations to a transport.
//!
//! Operations live next to their concern: submission in
//! [`crate::submitter`], read-only calls in [`crate::caller`], deployment
//! and other signed writes in [`crate::deployer`].

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::transport::Transport;

/// Stateless client over a transport.
///
/// Holds nothing but the transport: every transaction, envelope and
/// signature is built per call and dropped when the call returns, so a
/// `Client` can be shared freely if its transport is `Sync`.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl Client<HttpTransport> {
    /// Client talking JSON-RPC over HTTP to `config.rpc_url`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        tracing::debug!(rpc_url = %config.rpc_url, timeout_ms = config.request_timeout_ms, "client created");
        Ok(Self::new(transport))
    }
}
