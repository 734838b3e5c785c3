//! Client configuration.

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Environment variable holding the node's JSON-RPC URL.
pub const ENV_RPC_URL: &str = "TESSERA_RPC_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "TESSERA_TIMEOUT_MS";
/// Environment variable holding the `tracing` filter directive.
pub const ENV_LOG: &str = "TESSERA_LOG";

/// Configuration for the client and its HTTP transport.
///
/// Private keys are not part of it: they travel per call in
/// [`tessera_primitives::TransactParams`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: String,

    /// Per-request timeout enforced by the transport.
    /// Default: 10 000 ms.
    pub request_timeout_ms: u64,

    /// `tracing` filter used by [`crate::logging::init_tracing`].
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:1337".to_string(),
            request_timeout_ms: 10_000,
            log_filter: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TESSERA_RPC_URL`, `TESSERA_TIMEOUT_MS` and `TESSERA_LOG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_RPC_URL) {
            config.rpc_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.request_timeout_ms = raw.trim().parse().map_err(|e| {
                ClientError::Config(format!("{ENV_TIMEOUT_MS}={raw:?} is not a number: {e}"))
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the values a transport cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(ClientError::Config("rpc_url must be non-empty".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ClientError::Config("request_timeout_ms must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.rpc_url, "http://127.0.0.1:1337");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.log_filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_RPC_URL, "http://node:1337"),
            (ENV_TIMEOUT_MS, "2500"),
            (ENV_LOG, "tessera_client=debug"),
        ]))
        .unwrap();
        assert_eq!(config.rpc_url, "http://node:1337");
        assert_eq!(config.request_timeout_ms, 2_500);
        assert_eq!(config.log_filter, "tessera_client=debug");
    }

    #[test]
    fn test_env_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("soon")));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_MS, "0")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"rpc_url": "http://10.0.0.2:1337"}"#).unwrap();
        assert_eq!(config.rpc_url, "http://10.0.0.2:1337");
        assert_eq!(config.request_timeout_ms, 10_000);
    }
}
