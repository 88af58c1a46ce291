//! HTTP exchanges described as plain data.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` carry a request cycle as inert values.
//! The client layer builds requests and interprets responses without ever
//! touching the network; a [`Transport`](crate::transport::Transport)
//! executes the exchange in between. Keeping the boundary as plain data
//! makes every layer above it testable without a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! between the client, the transport, and test code.

/// HTTP method for a request. The API surface uses only bodied POSTs and
/// body-less GETs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods; executed by a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then handed
/// to `ApiClient::parse_*` methods for status checking and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
