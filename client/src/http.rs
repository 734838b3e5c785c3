//! JSON-RPC 2.0 transport over HTTP.
//!
//! Every call is a single `POST` of
//! `{"jsonrpc":"2.0","id":n,"method":..,"params":[..]}` with ids
//! increasing per transport instance. The request timeout comes from
//! [`ClientConfig`]; nothing here retries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::transport::{Response, Transport};

/// Blocking HTTP JSON-RPC transport.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Build a transport for `config.rpc_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| TransportError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: config.rpc_url.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this transport posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn send_request(&self, method: &str, params: Vec<Value>) -> Result<Response, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = request_body(id, method, params);
        tracing::trace!(id, method, url = %self.url, "rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|e| TransportError::Http(format!("{method} request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TransportError::Http(format!("{method} response body: {e}")))?;
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| TransportError::InvalidJson(e.to_string()))?;
        extract_result(value).map(Response::new)
    }
}

/// JSON-RPC request object.
fn request_body(id: u64, method: &str, params: Vec<Value>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

/// Pull `result` out of a JSON-RPC reply, or turn `error` into a `TransportError`.
fn extract_result(mut reply: Value) -> Result<Value, TransportError> {
    if !reply.is_object() {
        return Err(TransportError::InvalidJson(format!(
            "expected a JSON-RPC object, got {reply}"
        )));
    }
    if let Some(err) = reply.get("error").filter(|e| !e.is_null()) {
        let code = err.get("code").and_then(Value::as_i64).unwrap_or_default();
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| err.to_string());
        return Err(TransportError::Rpc { code, message });
    }
    match reply.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(TransportError::MissingResult),
    }
}
