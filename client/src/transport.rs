//! Transport trait — abstraction over the remote-call channel to a node.
//!
//! The `Transport` trait decouples the client from how requests reach the
//! node. Each call is one method name plus positional JSON params, and
//! one `Response` (or `TransportError`) back.
//!
//! - Over the network: [`crate::http::HttpTransport`] (JSON-RPC over HTTP)
//! - In tests: [`MockTransport`] (queued responses, recorded requests)
//!
//! Timeouts, cancellation and retries belong to the implementation. The
//! client never interprets them.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result, TransportError};

/// Method used to look up the code/ABI stored for an account.
pub const GET_ABI_METHOD: &str = "eth_getAbi";

/// Method used for read-only contract invocation.
pub const ETH_CALL_METHOD: &str = "eth_call";

/// Method used to submit a signed, hex-encoded envelope.
pub const SEND_TRANSACTION_METHOD: &str = "cita_sendTransaction";

/// A narrow request/response channel to a node.
pub trait Transport {
    /// Send one request and wait for its result.
    fn send_request(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send_request(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response, TransportError> {
        (**self).send_request(method, params)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send_request(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response, TransportError> {
        (**self).send_request(method, params)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_request(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response, TransportError> {
        (**self).send_request(method, params)
    }
}

/// The `result` value of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    result: Value,
}

impl Response {
    pub fn new(result: Value) -> Self {
        Self { result }
    }

    /// Raw result value.
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Result as a string. `null` reads as the empty string.
    pub fn get_string(&self) -> Result<String> {
        match &self.result {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Ok(String::new()),
            other => Err(ClientError::Decode(format!(
                "expected a string result, got {}",
                other
            ))),
        }
    }

    /// Decode the result into a caller-chosen shape.
    pub fn get_object<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.result).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

// ── MockTransport: in-process transport for testing ──

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub params: Vec<Value>,
}

/// Deterministic in-memory transport.
///
/// Replies are served from a FIFO queue in the order they were pushed;
/// every request is recorded for later assertions. An empty queue
/// answers with `TransportError::Mock`.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<std::result::Result<Value, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result.
    pub fn push_result(&self, result: Value) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(result));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
    }

    /// All requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of replies still queued.
    pub fn pending_replies(&self) -> usize {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for MockTransport {
    fn send_request(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method: method.to_string(),
                params,
            });

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match reply {
            Some(Ok(result)) => Ok(Response::new(result)),
            Some(Err(err)) => Err(err),
            None => Err(TransportError::Mock(format!("no reply queued for {}", method))),
        }
    }
}
