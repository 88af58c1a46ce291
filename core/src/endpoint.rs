//! Declarative table of backend endpoint contracts.
//!
//! Each endpoint is one (HTTP verb, path) pair with a fixed request and
//! response shape. `client.rs` pairs every entry here with a `build_*` /
//! `parse_*` method; adding an endpoint starts with adding a row to this
//! table.

use crate::http::{HttpMethod, HttpRequest};

/// A single (HTTP verb, path) contract exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Body-less request against this endpoint.
    pub fn request(self, base_url: &str) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: format!("{base_url}{}", self.path),
            headers: Vec::new(),
            body: None,
        }
    }

    /// JSON-bodied request against this endpoint.
    pub fn json_request(self, base_url: &str, body: String) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: format!("{base_url}{}", self.path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// POST a feature submission.
pub const SUBMIT_FEATURE: Endpoint = Endpoint::new(HttpMethod::Post, "/new-endpoint");

/// POST a journey booking.
pub const BOOK_JOURNEY: Endpoint = Endpoint::new(HttpMethod::Post, "/user/book-journey");

/// GET the registered users.
pub const LIST_USERS: Endpoint = Endpoint::new(HttpMethod::Get, "/users");
