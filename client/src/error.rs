//! Client error types.

/// Failure inside a transport, passed through the client unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("http error: {0}")]
    Http(String),

    /// The node answered with a non-success HTTP status.
    #[error("http status {code}: {body}")]
    Status { code: u16, body: String },

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The JSON-RPC reply carried neither `result` nor `error`.
    #[error("rpc response has no result")]
    MissingResult,

    /// The reply body was not valid JSON-RPC.
    #[error("invalid json response: {0}")]
    InvalidJson(String),

    /// Raised by the in-process test transport.
    #[error("mock transport: {0}")]
    Mock(String),
}

/// Top-level error type for the client crate.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Key, signing or encoding failure from the primitives layer.
    #[error(transparent)]
    Primitive(#[from] tessera_primitives::Error),

    /// The transport call itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The node received the transaction but did not accept it.
    #[error("send transaction failed, status is {status}")]
    RemoteRejection { status: String },

    /// The response could not be decoded into the requested shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Contract bytecode or call data is not valid hex.
    #[error("invalid code {input:?}: {reason}")]
    InvalidCode { input: String, reason: String },

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience result type for the client crate.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_carries_status() {
        let err = ClientError::RemoteRejection {
            status: "Dup".into(),
        };
        assert_eq!(err.to_string(), "send transaction failed, status is Dup");
    }

    #[test]
    fn test_transport_error_passthrough() {
        let inner = TransportError::Rpc {
            code: -32601,
            message: "method not found".into(),
        };
        let err: ClientError = inner.clone().into();
        match err {
            ClientError::Transport(e) => assert_eq!(e, inner),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_primitive_error_is_transparent() {
        let err: ClientError = tessera_primitives::Error::InvalidKey("bad".into()).into();
        assert_eq!(err.to_string(), "invalid private key: bad");
    }
}
