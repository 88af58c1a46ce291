//! Error types for the API client stack.
//!
//! # Design
//! Three layers, three types. `ApiError` covers the data plane (encode,
//! decode, unexpected status). `TransportError` covers connectivity.
//! `RequestError` is the façade's single error: every lower failure is
//! folded into it, but the category survives as a tagged [`ErrorKind`]
//! instead of being flattened to a string, so presentation code can still
//! tell a retryable network failure from a permanent contract violation.

use std::fmt;

/// Errors produced while building requests and interpreting responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    Encode(String),

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The server answered with a status outside the endpoint's contract.
    Http { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Encode(msg) => write!(f, "encoding request failed: {msg}"),
            ApiError::Decode(msg) => write!(f, "decoding response failed: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A connectivity-level failure: the exchange never produced a response.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Failure category preserved through every layer up to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exchange never completed (DNS, refused connection, reset).
    Network,
    /// The server reported an internal failure (5xx).
    Server,
    /// The response arrived but violated the endpoint contract.
    Protocol,
    /// The request was malformed or rejected by the server (4xx, encode).
    InvalidRequest,
}

impl ErrorKind {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Server)
    }
}

/// The façade's uniform request failure.
#[derive(Debug, Clone)]
pub struct RequestError {
    kind: ErrorKind,
    detail: String,
}

impl RequestError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Protocol => "protocol",
            ErrorKind::InvalidRequest => "invalid request",
        };
        write!(f, "request failed ({kind}): {}", self.detail)
    }
}

impl std::error::Error for RequestError {}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        RequestError::new(ErrorKind::Network, err.to_string())
    }
}

impl From<ApiError> for RequestError {
    fn from(err: ApiError) -> Self {
        let kind = match &err {
            ApiError::Encode(_) => ErrorKind::InvalidRequest,
            ApiError::Decode(_) => ErrorKind::Protocol,
            ApiError::Http { status, .. } if *status >= 500 => ErrorKind::Server,
            ApiError::Http { .. } => ErrorKind::InvalidRequest,
        };
        RequestError::new(kind, err.to_string())
    }
}
